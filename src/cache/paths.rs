// Store path utilities.
// Resolves where the rating snapshot lives on disk.

use std::path::PathBuf;

use directories::ProjectDirs;

/// File name of the persisted rating store.
pub const STORE_FILE: &str = "ratings.json";

/// Get the base cache directory (~/.cache/app-rater on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "app-rater").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the default rating store file.
pub fn store_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(STORE_FILE))
}

/// Path to the store for a configured override, or the default location.
pub fn resolve_store_path(override_path: Option<&PathBuf>) -> Option<PathBuf> {
    match override_path {
        Some(path) => Some(path.clone()),
        None => store_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_path() {
        // Path construction only, nothing touches the filesystem
        if let Some(path) = store_path() {
            assert!(path.ends_with(STORE_FILE));
        }
    }

    #[test]
    fn test_override_wins() {
        let custom = PathBuf::from("/tmp/custom/ratings.json");
        assert_eq!(resolve_store_path(Some(&custom)), Some(custom));
    }
}
