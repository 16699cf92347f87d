// File-backed key-value storage.
// One file per key, written atomically through a temp file.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

use super::DurableKeyValueStore;
use super::paths::slot_path;

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DurableKeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = slot_path(&self.dir, key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        Ok(Some(contents))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = slot_path(&self.dir, key);

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = slot_path(&self.dir, key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
