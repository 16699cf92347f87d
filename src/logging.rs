// Logging initialization.
// Logs go to a file since the TUI owns the terminal: --log-file, or the platform cache dir.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

use crate::storage::paths;

/// Install the global file logger. Logging is skipped if no file can be created.
pub fn initialize(level: LevelFilter, path: Option<PathBuf>) {
    let Some(path) = path.or_else(paths::log_path) else {
        return;
    };

    if let Some(file) = create_log_file(&path) {
        // Ignore the error if a logger is already installed.
        let _ = WriteLogger::init(level, build_config(), file);
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match File::create(path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_log_file_makes_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("postboard.log");

        assert!(create_log_file(&path).is_some());
        assert!(path.exists());
    }
}
