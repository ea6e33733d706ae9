//! Site configuration management for `sitepush.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── paths      # [paths]
//! │   ├── pipeline   # [pipeline]
//! │   └── tools      # [sync] [helper] [build] [publish]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional. Without one every setting takes its default
//! and the current directory is the base for relative paths.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildConfig, HelperConfig, PathsConfig, PipelineConfig, PublishConfig, SyncConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, DEFAULT_CONFIG},
    debug, log,
    pipeline::validate_paths,
    utils::path::{normalize_path, resolve_path},
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitepush.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Source, root, destination and counter locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Pipeline pacing
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Directory mirror tool
    #[serde(default)]
    pub sync: SyncConfig,

    /// Image helper script
    #[serde(default)]
    pub helper: HelperConfig,

    /// Static-site builder
    #[serde(default)]
    pub build: BuildConfig,

    /// Version control
    #[serde(default)]
    pub publish: PublishConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. An explicit `--config`
    /// must exist; the default name may be absent.
    pub fn load(cli: &Cli) -> Result<Self> {
        crate::logger::set_verbose(cli.verbose);
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let name = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

        let mut config = match find_config_file(&name, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = normalize_path(&path);
                config
            }
            None if cli.config.is_some() => return Err(ConfigError::NotFound(name).into()),
            None => {
                debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG);
                Self::default()
            }
        };

        let base = config
            .config_path
            .parent()
            .map_or_else(|| cwd.clone(), Path::to_path_buf);
        config.finalize(&base, &cwd, cli);
        config.preflight()?;

        debug!("config"; "source: {}", config.paths.source.display());
        debug!("config"; "root: {}", config.paths.root.display());
        debug!("config"; "dest: {}", config.paths.dest.display());
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Get the site root directory path
    pub fn get_root(&self) -> &Path {
        &self.paths.root
    }

    /// Pause between pipeline steps.
    pub fn pause(&self) -> Duration {
        self.pipeline.pause_duration()
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve every path to absolute form.
    ///
    /// CLI overrides are relative to `cwd`; config values to `base` (the
    /// config file's directory). Destination, counter and helper script are
    /// relative to the resolved root.
    fn finalize(&mut self, base: &Path, cwd: &Path, cli: &Cli) {
        let root = match &cli.root {
            Some(root) => resolve_path(root, cwd),
            None => resolve_path(&self.paths.root, base),
        };
        let source = match &cli.source {
            Some(source) => resolve_path(source, cwd),
            None => resolve_path(&self.paths.source, base),
        };
        self.set_paths(&normalize_path(&root), &normalize_path(&source));
    }

    /// Set root and source, resolving the root-relative paths against `root`.
    fn set_paths(&mut self, root: &Path, source: &Path) {
        self.paths.root = root.to_path_buf();
        self.paths.source = source.to_path_buf();
        self.paths.dest = resolve_path(&self.paths.dest, root);
        self.paths.counter = resolve_path(&self.paths.counter, root);
        self.helper.script = resolve_path(&self.helper.script, root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Directory checks first, then values and installed tools, so a missing
    /// notes or site directory is always the first error reported.
    fn preflight(&self) -> Result<()> {
        validate_paths(self)?;
        self.validate(true)
    }

    /// Validate configuration values.
    ///
    /// Collects all errors and returns them at once. `check_installed` also
    /// verifies that each external program can be found on `PATH`.
    pub fn validate(&self, check_installed: bool) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.pipeline.validate(&mut diag);
        self.sync.validate(&mut diag, check_installed);
        self.helper.validate(&mut diag, check_installed);
        self.build.validate(&mut diag, check_installed);
        self.publish.validate(&mut diag, check_installed);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Default config rooted at `root`, mirroring from `source`, with no pauses.
#[cfg(test)]
pub fn test_config(root: &Path, source: &Path) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.pipeline.pause = 0.0;
    config.set_paths(root, source);
    config
}

// ============================================================================
// tests
// ============================================================================
