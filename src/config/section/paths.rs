//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! source = "~/notes/posts"       # Notes directory to publish
//! root = "."                     # Site root (relative to the config file)
//! dest = "content/posts"         # Mirror destination (relative to root)
//! counter = ".commit_counter"    # Commit counter file (relative to root)
//! ```

use serde::Deserialize;
use std::path::PathBuf;

/// Directory and file locations for a publish run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Notes directory mirrored into the site. `~` is expanded.
    pub source: PathBuf,

    /// Site root: builder and git run here.
    pub root: PathBuf,

    /// Destination posts directory.
    pub dest: PathBuf,

    /// File holding the last commit number.
    pub counter: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: "~/notes/posts".into(),
            root: ".".into(),
            dest: "content/posts".into(),
            counter: ".commit_counter".into(),
        }
    }
}
