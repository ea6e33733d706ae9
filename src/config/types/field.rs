//! Type-safe config field path.

use crate::logger::paint;
use owo_colors::{Stream, Style};
use std::fmt;

/// A wrapper for config field paths used in diagnostics.
///
/// Each section declares its fields as associated constants.
///
/// # Example
///
/// ```ignore
/// impl BuildConfig {
///     pub const COMMAND: FieldPath = FieldPath::new("build.command");
/// }
///
/// diag.error(BuildConfig::COMMAND, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = paint(format_args!("`{}`", self.0), Stream::Stderr, Style::new().bright_blue());
        f.write_str(&path)
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
