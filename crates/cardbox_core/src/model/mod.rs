//! Domain model for reading cards.
//!
//! # Responsibility
//! - Define the canonical card record shared by store, intents and UI layers.
//!
//! # Invariants
//! - Every card is identified by a stable, collection-unique `CardId`.
//! - `created_at` is captured once at creation and never rewritten.

pub mod card;
