//! Precondition checks run before any external command.

use super::PipelineError;
use crate::config::SiteConfig;
use std::path::Path;

/// Verify the notes source and the site root are existing directories.
///
/// Stops at the first missing one; the source is checked first.
pub fn validate_paths(config: &SiteConfig) -> Result<(), PipelineError> {
    require_dir("notes source", &config.paths.source)?;
    require_dir("site root", config.get_root())?;
    Ok(())
}

fn require_dir(label: &'static str, path: &Path) -> Result<(), PipelineError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(PipelineError::MissingDirectory {
            label,
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use std::fs;

    #[test]
    fn test_existing_directories_pass() {
        let root = tempfile::tempdir().unwrap();
        let source = tempfile::tempdir().unwrap();
        let config = test_config(root.path(), source.path());
        assert!(validate_paths(&config).is_ok());
    }

    #[test]
    fn test_missing_source_reported_first() {
        let scratch = tempfile::tempdir().unwrap();
        let config = test_config(&scratch.path().join("no-root"), &scratch.path().join("no-notes"));

        let err = validate_paths(&config).unwrap_err();
        assert!(matches!(err, PipelineError::MissingDirectory { label: "notes source", .. }));
        assert!(err.to_string().contains("no-notes"));
    }

    #[test]
    fn test_missing_root() {
        let scratch = tempfile::tempdir().unwrap();
        let config = test_config(&scratch.path().join("no-root"), scratch.path());

        let err = validate_paths(&config).unwrap_err();
        assert!(matches!(err, PipelineError::MissingDirectory { label: "site root", .. }));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let scratch = tempfile::tempdir().unwrap();
        let file = scratch.path().join("posts.md");
        fs::write(&file, "").unwrap();
        let config = test_config(scratch.path(), &file);

        assert!(validate_paths(&config).is_err());
    }
}
