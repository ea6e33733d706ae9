//! Pipeline step identity.

use std::fmt;

/// One stage of a publish run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Sync,
    Helper,
    Build,
    Publish,
}

impl Step {
    /// Log prefix for the step.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Helper => "helper",
            Self::Build => "build",
            Self::Publish => "git",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
