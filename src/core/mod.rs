//! Core types - pure abstractions shared across the codebase.

mod state;
mod step;

pub use state::{is_shutdown, setup_shutdown_handler};
pub use step::Step;
