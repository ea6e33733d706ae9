//! External tool sections: `[sync]`, `[helper]`, `[build]`, `[publish]`.
//!
//! # Example
//!
//! ```toml
//! [sync]
//! command = "rsync"
//!
//! [helper]
//! script = "images.py"          # Relative to the site root; skipped if missing
//! interpreter = "python3"
//!
//! [build]
//! command = "hugo"
//! base_url = "http://localhost"
//! gc = true
//! minify = true
//!
//! [publish]
//! command = "git"
//! remote = "origin"
//! message = "Post update"       # Commit message prefix, followed by the counter
//! ```

use super::super::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;
use std::path::PathBuf;

/// Report an empty command, or one that is not on `PATH`.
fn check_command(diag: &mut ConfigDiagnostics, field: FieldPath, cmd: &str, check_installed: bool) {
    if cmd.trim().is_empty() {
        diag.error(field, format!("{field} must not be empty"));
        return;
    }
    if check_installed && which::which(cmd).is_err() {
        diag.error_with_hint(
            field,
            format!("`{cmd}` not found"),
            format!("install the command or update {field}"),
        );
    }
}

// ============================================================================
// [sync]
// ============================================================================

/// Directory mirror tool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// rsync-compatible program.
    pub command: String,
}

impl SyncConfig {
    pub const COMMAND: FieldPath = FieldPath::new("sync.command");

    pub fn validate(&self, diag: &mut ConfigDiagnostics, check_installed: bool) {
        check_command(diag, Self::COMMAND, &self.command, check_installed);
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            command: "rsync".to_string(),
        }
    }
}

// ============================================================================
// [helper]
// ============================================================================

/// Optional image-processing helper script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Script path, relative to the site root.
    pub script: PathBuf,

    /// Program used to run the script.
    pub interpreter: String,
}

impl HelperConfig {
    pub const INTERPRETER: FieldPath = FieldPath::new("helper.interpreter");

    /// The interpreter is only required when the script is present.
    pub fn validate(&self, diag: &mut ConfigDiagnostics, check_installed: bool) {
        check_command(
            diag,
            Self::INTERPRETER,
            &self.interpreter,
            check_installed && self.script.is_file(),
        );
    }
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            script: "images.py".into(),
            interpreter: "python3".to_string(),
        }
    }
}

// ============================================================================
// [build]
// ============================================================================

/// Static-site builder invocation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Hugo-compatible program.
    pub command: String,

    /// Placeholder base URL for the verification build.
    pub base_url: String,

    /// Garbage-collect unused cache files (`--gc`).
    pub gc: bool,

    /// Minify output (`--minify`).
    pub minify: bool,
}

impl BuildConfig {
    pub const COMMAND: FieldPath = FieldPath::new("build.command");
    pub const BASE_URL: FieldPath = FieldPath::new("build.base_url");

    pub fn validate(&self, diag: &mut ConfigDiagnostics, check_installed: bool) {
        check_command(diag, Self::COMMAND, &self.command, check_installed);
        if self.base_url.trim().is_empty() {
            diag.error(Self::BASE_URL, format!("{} must not be empty", Self::BASE_URL));
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: "hugo".to_string(),
            base_url: "http://localhost".to_string(),
            gc: true,
            minify: true,
        }
    }
}

// ============================================================================
// [publish]
// ============================================================================

/// Version-control client and push target.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Git-compatible program.
    pub command: String,

    /// Remote the current branch is pushed to.
    pub remote: String,

    /// Commit message prefix; the counter value is appended.
    pub message: String,
}

impl PublishConfig {
    pub const COMMAND: FieldPath = FieldPath::new("publish.command");
    pub const REMOTE: FieldPath = FieldPath::new("publish.remote");
    pub const MESSAGE: FieldPath = FieldPath::new("publish.message");

    pub fn validate(&self, diag: &mut ConfigDiagnostics, check_installed: bool) {
        check_command(diag, Self::COMMAND, &self.command, check_installed);
        if self.remote.trim().is_empty() {
            diag.error(Self::REMOTE, format!("{} must not be empty", Self::REMOTE));
        }
        if self.message.trim().is_empty() {
            diag.error(Self::MESSAGE, format!("{} must not be empty", Self::MESSAGE));
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            command: "git".to_string(),
            remote: "origin".to_string(),
            message: "Post update".to_string(),
        }
    }
}
