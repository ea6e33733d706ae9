//! Path normalization utilities.
//!
//! Provides consistent path handling across the codebase:
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_path` - `~` expansion, then resolve relative paths against a base
//! - `contents_of` / `strip_trailing_separator` - rsync-style source/destination forms

use std::{
    ffi::OsString,
    path::{MAIN_SEPARATOR, Path, PathBuf},
};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` and resolve the result against `base` if relative.
///
/// # Example
/// ```ignore
/// resolve_path(Path::new("content/posts"), root)  // -> <root>/content/posts
/// resolve_path(Path::new("~/notes"), root)        // -> $HOME/notes
/// ```
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    };
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

/// Path with exactly one trailing separator, so rsync copies the directory's
/// contents rather than the directory itself.
pub fn contents_of(path: &Path) -> OsString {
    let mut s = strip_trailing_separator(path);
    s.push(MAIN_SEPARATOR.to_string());
    s
}

/// Path with any trailing separators removed (the root `/` is kept).
pub fn strip_trailing_separator(path: &Path) -> OsString {
    let raw = path.as_os_str().to_string_lossy();
    let trimmed = raw.trim_end_matches(['/', MAIN_SEPARATOR]);
    if trimmed.is_empty() && !raw.is_empty() {
        return OsString::from(MAIN_SEPARATOR.to_string());
    }
    OsString::from(trimmed)
}
