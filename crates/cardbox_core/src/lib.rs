//! Core domain logic for cardbox reading cards.
//! This crate is the single source of truth for card collection invariants.

pub mod intent;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use intent::{parse_tags_input, Intent, IntentDispatcher, ViewState};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::card::{Card, CardId};
pub use storage::{FileStorage, MemoryStorage, StorageAdapter, StorageError, StorageResult};
pub use store::card_store::{
    CardStore, LoadPolicy, StoreError, StoreResult, DEFAULT_STORAGE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
