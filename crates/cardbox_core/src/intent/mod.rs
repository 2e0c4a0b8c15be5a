//! Presentation intents and dispatch.
//!
//! # Responsibility
//! - Model user actions as an explicit command enum instead of UI callbacks.
//! - Translate each intent into store operations and hand back a render-ready
//!   view snapshot.
//!
//! # Invariants
//! - The dispatcher owns the active tag filter; mutating intents re-render
//!   under whatever filter is in effect.
//! - A submit while an edit target is set updates that card and clears the
//!   target; otherwise it adds a new card.

use crate::model::card::{Card, CardId};
use crate::storage::StorageAdapter;
use crate::store::card_store::CardStore;

/// User intent forwarded by a presentation layer.
///
/// One variant per control the original form exposed; confirmation dialogs
/// and input focus stay upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Form submit: add a card, or update the current edit target.
    Submit {
        title: String,
        content: String,
        /// Raw comma-separated tag text, parsed by `parse_tags_input`.
        tags_input: String,
    },
    /// Begin editing the card with the given id.
    EditClick { id: CardId },
    /// Abandon the in-progress edit.
    CancelEdit,
    /// Remove the card with the given id. The caller confirms beforehand.
    DeleteClick { id: CardId },
    /// Restrict the visible list to one tag; empty string shows everything.
    FilterChange { tag: String },
}

/// Snapshot handed to the presentation layer after each intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Cards visible under the active tag filter, in insertion order.
    pub cards: Vec<Card>,
    /// Filter dropdown options: every known tag in first-seen order.
    pub tag_options: Vec<String>,
    /// Card whose fields should populate the form, when editing.
    pub edit_target: Option<Card>,
    /// Active tag filter; empty means "all".
    pub filter: String,
    /// True when persistence is unavailable and changes live in memory only.
    pub degraded: bool,
}

impl ViewState {
    /// The "no cards found" render state.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Splits comma-separated form input into tags: trim each piece, drop
/// empties, keep order and duplicates.
pub fn parse_tags_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Dispatches presentation intents to a `CardStore`.
pub struct IntentDispatcher<S: StorageAdapter> {
    store: CardStore<S>,
    filter: String,
}

impl<S: StorageAdapter> IntentDispatcher<S> {
    /// Wraps a (typically already loaded) store with an empty filter.
    pub fn new(store: CardStore<S>) -> Self {
        Self {
            store,
            filter: String::new(),
        }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &CardStore<S> {
        &self.store
    }

    /// Applies one intent and returns the refreshed view.
    pub fn dispatch(&mut self, intent: Intent) -> ViewState {
        match intent {
            Intent::Submit {
                title,
                content,
                tags_input,
            } => {
                let tags = parse_tags_input(&tags_input);
                match self.store.edit_target() {
                    Some(id) => {
                        self.store.update(id, title, content, tags);
                        self.store.set_edit_target(None);
                    }
                    None => {
                        self.store.add(title, content, tags);
                    }
                }
            }
            Intent::EditClick { id } => {
                // Ignore stale ids so the form never points at a missing card.
                if self.store.find_by_id(id).is_some() {
                    self.store.set_edit_target(Some(id));
                }
            }
            Intent::CancelEdit => self.store.set_edit_target(None),
            Intent::DeleteClick { id } => {
                self.store.delete(id);
            }
            Intent::FilterChange { tag } => self.filter = tag,
        }
        self.view()
    }

    /// Current view under the active filter, without mutating anything.
    pub fn view(&self) -> ViewState {
        ViewState {
            cards: self
                .store
                .list_filtered(&self.filter)
                .into_iter()
                .cloned()
                .collect(),
            tag_options: self.store.distinct_tags(),
            edit_target: self
                .store
                .edit_target()
                .and_then(|id| self.store.find_by_id(id).cloned()),
            filter: self.filter.clone(),
            degraded: self.store.is_degraded(),
        }
    }
}
