//! Key-value storage boundary.
//!
//! # Responsibility
//! - Define the durable key-value contract the card store persists through.
//! - Keep filesystem details out of store/business orchestration.
//!
//! # Invariants
//! - Values written through `set` survive process restarts on the same
//!   device (memory adapter excepted, by design).
//! - Adapters never interpret the stored payload; serialization belongs to
//!   the store.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level error for storage adapters.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying I/O failure for the given key.
    Io {
        key: String,
        source: std::io::Error,
    },
    /// Key cannot be mapped to a storage location.
    InvalidKey(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { key, source } => write!(f, "storage i/o failure for key `{key}`: {source}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key `{key}`"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidKey(_) => None,
        }
    }
}

/// String key-value store surviving across sessions on one device.
///
/// Mirrors the `get`/`set` surface of browser local storage: a single flat
/// namespace, whole-value reads and writes, no partial updates.
pub trait StorageAdapter {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
