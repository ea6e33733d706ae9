//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/content/posts/  ← start
/// /home/user/blog/sitepush.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sitepush.toml"), "").unwrap();

        let found = find_config_file(Path::new("sitepush.toml"), dir.path());
        assert_eq!(found, Some(dir.path().join("sitepush.toml")));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sitepush.toml"), "").unwrap();
        let nested = dir.path().join("content/posts");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(Path::new("sitepush.toml"), &nested);
        assert_eq!(found, Some(dir.path().join("sitepush.toml")));
    }

    #[test]
    fn test_find_config_absolute_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert_eq!(find_config_file(&missing, dir.path()), None);
    }

    #[test]
    fn test_directory_with_config_name_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("inner");
        fs::create_dir_all(nested.join("sitepush-dir-test.toml")).unwrap();
        fs::write(dir.path().join("sitepush-dir-test.toml"), "").unwrap();

        let found = find_config_file(Path::new("sitepush-dir-test.toml"), &nested);
        assert_eq!(found, Some(dir.path().join("sitepush-dir-test.toml")));
    }
}
