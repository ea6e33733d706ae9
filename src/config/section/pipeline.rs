//! `[pipeline]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [pipeline]
//! pause = 1.0    # Seconds to wait after sync, helper and build
//! ```

use super::super::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Pause between steps, in seconds.
    pub pause: f64,
}

impl PipelineConfig {
    pub const PAUSE: FieldPath = FieldPath::new("pipeline.pause");

    /// Pause as a duration (zero if the value is out of range).
    pub fn pause_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.pause).unwrap_or_default()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.pause.is_finite() || self.pause < 0.0 {
            diag.error(
                Self::PAUSE,
                format!("{} must be a non-negative number of seconds", Self::PAUSE),
            );
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { pause: 1.0 }
    }
}
