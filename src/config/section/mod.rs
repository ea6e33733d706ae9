//! Configuration section definitions.
//!
//! Each module corresponds to one or more sections in `sitepush.toml`:
//!
//! | Module     | TOML Section                                | Purpose                        |
//! |------------|---------------------------------------------|--------------------------------|
//! | `paths`    | `[paths]`                                   | Source, root, destination      |
//! | `pipeline` | `[pipeline]`                                | Pause between steps            |
//! | `tools`    | `[sync]`, `[helper]`, `[build]`, `[publish]` | External tool invocation       |

mod paths;
mod pipeline;
mod tools;

// Re-export section configs
pub use paths::PathsConfig;
pub use pipeline::PipelineConfig;
pub use tools::{BuildConfig, HelperConfig, PublishConfig, SyncConfig};
