//! File-backed storage adapter.
//!
//! # Responsibility
//! - Map storage keys to files under a root directory.
//! - Emit `storage_open` logging events during bootstrap.
//!
//! # Invariants
//! - Keys are restricted to `[A-Za-z0-9._-]` so they map to safe file names.
//! - A key's value lives in exactly one file; writes replace it whole.

use super::{StorageAdapter, StorageError, StorageResult};
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// One-file-per-key adapter rooted at a directory.
///
/// The durable counterpart of browser local storage for a desktop process:
/// `get` reads `<root>/<key>.json`, `set` rewrites it.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens (creating if needed) the storage root directory.
    ///
    /// # Side effects
    /// - Creates the directory tree under `root`.
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(root: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        let root = root.as_ref().to_path_buf();
        info!("event=storage_open module=storage status=start mode=file");

        if let Err(err) = fs::create_dir_all(&root) {
            error!(
                "event=storage_open module=storage status=error duration_ms={} root={} error={}",
                started_at.elapsed().as_millis(),
                root.display(),
                err
            );
            return Err(StorageError::Io {
                key: root.display().to_string(),
                source: err,
            });
        }

        info!(
            "event=storage_open module=storage status=ok duration_ms={} root={}",
            started_at.elapsed().as_millis(),
            root.display()
        );
        Ok(Self { root })
    }

    /// Returns the storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl StorageAdapter for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io {
                key: key.to_string(),
                source: err,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        fs::write(&path, value).map_err(|err| StorageError::Io {
            key: key.to_string(),
            source: err,
        })
    }
}
