// In-process and no-op storage backings.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{PostboardError, Result};

use super::DurableKeyValueStore;

/// Map-backed storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|e| PostboardError::Storage(e.to_string()))
    }
}

impl DurableKeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Stand-in for environments without persistent storage.
/// Reads are always absent and writes are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl DurableKeyValueStore for NoopStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}
