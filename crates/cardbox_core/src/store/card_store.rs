//! CardStore: CRUD + filter state machine over the card collection.
//!
//! # Responsibility
//! - Provide create/update/delete/list/filter operations over cards.
//! - Synchronize the collection with a `StorageAdapter` on every mutation.
//! - Track the advisory edit target for the presentation layer.
//!
//! # Invariants
//! - `id` is unique across the collection at all times.
//! - The collection keeps insertion order; no operation reorders it.
//! - Every successful mutation persists before control returns; a failing
//!   adapter flips the store into degraded (memory-only) mode instead of
//!   failing the operation.

use crate::model::card::{Card, CardId};
use crate::storage::{StorageAdapter, StorageError};
use chrono::Utc;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key the original browser application persisted under. Kept as
/// the default so an existing dataset is picked up unchanged.
pub const DEFAULT_STORAGE_KEY: &str = "fichasDeLeituraApp";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for load/persist paths.
#[derive(Debug)]
pub enum StoreError {
    /// Storage adapter transport failure.
    Storage(StorageError),
    /// Persisted payload failed to deserialize under `LoadPolicy::Strict`.
    CorruptData(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::CorruptData(err) => write!(f, "corrupt persisted card data: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::CorruptData(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Policy applied when the persisted payload fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Fall back to an empty collection and log a warning. Matches the
    /// original application, which preferred losing the dataset over
    /// refusing to start.
    #[default]
    ResetOnCorrupt,
    /// Surface `StoreError::CorruptData` and leave the collection untouched.
    Strict,
}

/// Monotonic id generator seeded from the wall clock.
///
/// Raw `Date.now()`-style ids can collide when two adds land in the same
/// millisecond; issued ids are clamped to strictly exceed the last one seen,
/// including ids observed in a loaded dataset.
#[derive(Debug, Default)]
struct IdGenerator {
    last: CardId,
}

impl IdGenerator {
    fn observe(&mut self, id: CardId) {
        if id > self.last {
            self.last = id;
        }
    }

    fn next(&mut self) -> CardId {
        let now_ms = Utc::now().timestamp_millis().max(0) as CardId;
        self.last = now_ms.max(self.last + 1);
        self.last
    }
}

/// Owns the card collection and mirrors every mutation to storage.
pub struct CardStore<S: StorageAdapter> {
    storage: S,
    storage_key: String,
    load_policy: LoadPolicy,
    cards: Vec<Card>,
    edit_target: Option<CardId>,
    ids: IdGenerator,
    degraded: bool,
}

impl<S: StorageAdapter> CardStore<S> {
    /// Creates a store over the given adapter, key and load policy.
    ///
    /// The collection starts empty; call `load` to pick up persisted state.
    pub fn new(storage: S, storage_key: impl Into<String>, load_policy: LoadPolicy) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
            load_policy,
            cards: Vec::new(),
            edit_target: None,
            ids: IdGenerator::default(),
            degraded: false,
        }
    }

    /// Creates a store with the legacy storage key and lenient load policy.
    pub fn with_defaults(storage: S) -> Self {
        Self::new(storage, DEFAULT_STORAGE_KEY, LoadPolicy::default())
    }

    /// Loads the persisted collection.
    ///
    /// - Absent key: the collection becomes empty.
    /// - Unreadable adapter: the session continues memory-only (degraded).
    /// - Malformed payload: handled per `LoadPolicy`.
    ///
    /// Loading re-seeds the id generator above the highest persisted id.
    ///
    /// # Errors
    /// - `StoreError::CorruptData` under `LoadPolicy::Strict` only.
    pub fn load(&mut self) -> StoreResult<()> {
        let raw = match self.storage.get(&self.storage_key) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=store_load module=store status=degraded key={} error={}",
                    self.storage_key, err
                );
                self.degraded = true;
                self.cards.clear();
                return Ok(());
            }
        };

        let Some(raw) = raw else {
            self.cards.clear();
            info!(
                "event=store_load module=store status=ok key={} cards=0 source=absent",
                self.storage_key
            );
            return Ok(());
        };

        match serde_json::from_str::<Vec<Card>>(&raw) {
            Ok(cards) => {
                for card in &cards {
                    self.ids.observe(card.id);
                }
                info!(
                    "event=store_load module=store status=ok key={} cards={}",
                    self.storage_key,
                    cards.len()
                );
                self.cards = cards;
                Ok(())
            }
            Err(err) => match self.load_policy {
                LoadPolicy::ResetOnCorrupt => {
                    warn!(
                        "event=store_load module=store status=reset key={} error={}",
                        self.storage_key, err
                    );
                    self.cards.clear();
                    Ok(())
                }
                LoadPolicy::Strict => Err(StoreError::CorruptData(err)),
            },
        }
    }

    /// Appends a freshly-identified card and persists.
    ///
    /// Title/content/tags are stored as given; trimming is the caller's job.
    /// Returns the updated sequence.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> &[Card] {
        let card = Card::new(self.ids.next(), title, content, tags);
        self.cards.push(card);
        self.persist();
        &self.cards
    }

    /// Replaces title/content/tags of the card with the given id, preserving
    /// `id` and `created_at`. Unknown ids are a silent no-op.
    ///
    /// Returns the updated sequence.
    pub fn update(
        &mut self,
        id: CardId,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> &[Card] {
        if let Some(card) = self.cards.iter_mut().find(|card| card.id == id) {
            card.title = title.into();
            card.content = content.into();
            card.tags = tags;
            self.persist();
        }
        &self.cards
    }

    /// Removes the card with the given id; no-op when absent.
    ///
    /// Clears the edit target when it pointed at the removed card.
    /// Returns the updated sequence.
    pub fn delete(&mut self, id: CardId) -> &[Card] {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        if self.cards.len() != before {
            if self.edit_target == Some(id) {
                self.edit_target = None;
            }
            self.persist();
        }
        &self.cards
    }

    /// Returns the card with the given id, if present.
    pub fn find_by_id(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Returns the full collection in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns cards carrying `tag`, in original order. An empty tag returns
    /// the whole collection.
    pub fn list_filtered(&self, tag: &str) -> Vec<&Card> {
        if tag.is_empty() {
            self.cards.iter().collect()
        } else {
            self.cards.iter().filter(|card| card.has_tag(tag)).collect()
        }
    }

    /// Returns every known tag once, in first-seen order.
    pub fn distinct_tags(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for card in &self.cards {
            for tag in &card.tags {
                if !seen.iter().any(|known| known == tag) {
                    seen.push(tag.clone());
                }
            }
        }
        seen
    }

    /// Sets or clears the advisory edit target. Not persisted.
    pub fn set_edit_target(&mut self, id: Option<CardId>) {
        self.edit_target = id;
    }

    /// Returns the card id currently being edited, if any.
    pub fn edit_target(&self) -> Option<CardId> {
        self.edit_target
    }

    /// True when the adapter stopped accepting writes and the session runs
    /// memory-only.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Consumes the store and hands the adapter back, ending the session.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.cards) {
            Ok(payload) => payload,
            Err(err) => {
                error!(
                    "event=store_persist module=store status=error key={} error={}",
                    self.storage_key, err
                );
                return;
            }
        };

        match self.storage.set(&self.storage_key, &payload) {
            Ok(()) => {
                if self.degraded {
                    info!(
                        "event=store_persist module=store status=recovered key={}",
                        self.storage_key
                    );
                    self.degraded = false;
                }
            }
            Err(err) => {
                if !self.degraded {
                    warn!(
                        "event=store_persist module=store status=degraded key={} error={}",
                        self.storage_key, err
                    );
                }
                self.degraded = true;
            }
        }
    }
}
