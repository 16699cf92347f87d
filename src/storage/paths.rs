// Storage path utilities.
// Resolves platform directories and maps storage keys to file names.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "postboard")
}

/// Get the base data directory (~/.local/share/postboard on Linux).
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the base cache directory (~/.cache/postboard on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the application log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("postboard.log"))
}

/// Path of the file backing a storage key inside `dir`.
pub fn slot_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", sanitize_name(key)))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '.' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("post-storage"), "post-storage");
        assert_eq!(sanitize_name("with/slash"), "with_slash");
        assert_eq!(sanitize_name("../escape"), "___escape");
    }

    #[test]
    fn test_slot_path() {
        let path = slot_path(Path::new("/tmp/postboard"), "post-storage");
        assert!(path.ends_with("postboard/post-storage.json"));
    }

    #[test]
    fn test_log_path() {
        if let Some(path) = log_path() {
            assert!(path.ends_with("postboard.log"));
        }
    }
}
