//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path handling (`normalize_path`, `resolve_path`, `contents_of`)

pub mod fs;

pub use fs::{contents_of, normalize_path, resolve_path, strip_trailing_separator};
