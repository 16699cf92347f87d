// Durable key-value storage.
// Capability interface for persisting store state, with file, memory, and no-op backings.

pub mod file;
pub mod memory;
pub mod paths;

use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{PostboardError, Result};

pub use file::FileStore;
pub use memory::{MemoryStore, NoopStore};

/// String-valued key-value storage that survives across sessions.
///
/// Serialization is the caller's concern; implementations only move strings.
pub trait DurableKeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Which storage backing the hosting environment provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StorageKind {
    /// Files under the platform data directory.
    #[default]
    File,
    /// In-process only; lost on exit.
    Memory,
    /// No persistent storage available.
    None,
}

/// Build the storage backing for the given kind.
///
/// `dir` overrides the platform data directory for `StorageKind::File`.
pub fn open_storage(
    kind: StorageKind,
    dir: Option<PathBuf>,
) -> Result<Box<dyn DurableKeyValueStore>> {
    match kind {
        StorageKind::File => {
            let dir = dir.or_else(paths::data_dir).ok_or_else(|| {
                PostboardError::Storage("no data directory available".to_string())
            })?;
            Ok(Box::new(FileStore::new(dir)))
        }
        StorageKind::Memory => Ok(Box::new(MemoryStore::new())),
        StorageKind::None => Ok(Box::new(NoopStore)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_storage_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        let storage = open_storage(StorageKind::File, Some(temp_dir.path().to_path_buf())).unwrap();

        storage.set_item("slot", "value").unwrap();
        assert_eq!(storage.get_item("slot").unwrap(), Some("value".to_string()));
        assert!(temp_dir.path().join("slot.json").exists());
    }

    #[test]
    fn test_open_none_storage_is_inert() {
        let storage = open_storage(StorageKind::None, None).unwrap();

        storage.set_item("slot", "value").unwrap();
        assert_eq!(storage.get_item("slot").unwrap(), None);
    }
}
