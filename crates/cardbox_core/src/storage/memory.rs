//! In-memory storage adapter.

use super::{StorageAdapter, StorageResult};
use std::collections::HashMap;

/// HashMap-backed adapter for tests and persistence-less sessions.
///
/// Nothing survives the process; a store running on this adapter is the
/// degraded, memory-only mode made explicit.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
