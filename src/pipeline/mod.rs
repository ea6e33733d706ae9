//! The publish pipeline.
//!
//! ```text
//! validate paths → sync → [helper] → build → stage → counter → commit → branch → push
//! ```
//!
//! Steps run strictly in order. The first failure ends the run: nothing is
//! retried and nothing already done is rolled back. A short pause follows the
//! sync, helper and build steps so their output can be read.

mod preflight;

pub use preflight::validate_paths;

use crate::{
    config::SiteConfig,
    core::{Step, is_shutdown},
    counter::CommitCounter,
    debug, log,
    tools::Toolchain,
};
use anyhow::Result;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline-level failures (tool failures surface as `CommandError`).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{label} path not found: {}", path.display())]
    MissingDirectory { label: &'static str, path: PathBuf },

    #[error("interrupted before the {0} step")]
    Interrupted(Step),
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub message: String,
    pub branch: String,
}

/// One publish run over a configured site.
pub struct Pipeline<'a> {
    config: &'a SiteConfig,
    tools: Toolchain<'a>,
    interrupted: Box<dyn Fn() -> bool + 'a>,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a SiteConfig, tools: Toolchain<'a>) -> Self {
        Self {
            config,
            tools,
            interrupted: Box::new(is_shutdown),
        }
    }

    /// Replace the Ctrl+C check consulted between steps.
    #[cfg(test)]
    pub fn with_interrupt_check(mut self, check: impl Fn() -> bool + 'a) -> Self {
        self.interrupted = Box::new(check);
        self
    }

    /// Run every step, stopping at the first failure.
    pub fn run(&self) -> Result<Published> {
        let config = self.config;
        let root = config.get_root();

        validate_paths(config)?;

        // 1) mirror notes into the site
        self.checkpoint(Step::Sync)?;
        log!(Step::Sync.name(); "{} -> {}", config.paths.source.display(), config.paths.dest.display());
        self.tools
            .mirror
            .mirror(&config.paths.source, &config.paths.dest)?;
        self.pause();

        // 2) image helper, only if present
        let script = &config.helper.script;
        if script.is_file() {
            self.checkpoint(Step::Helper)?;
            self.tools.helper.run_script(script, root)?;
            self.pause();
        } else {
            debug!(Step::Helper.name(); "{} not found, skipping", script.display());
        }

        // 3) verification build
        self.checkpoint(Step::Build)?;
        self.tools.builder.build(root)?;
        self.pause();

        // 4) commit and push
        self.checkpoint(Step::Publish)?;
        self.publish()
    }

    /// Stage, number, commit, then push the checked-out branch.
    fn publish(&self) -> Result<Published> {
        let config = self.config;
        let root = config.get_root();
        let vcs = self.tools.vcs;

        vcs.stage_all(root)?;

        let counter = CommitCounter::new(&config.paths.counter, &config.publish.message);
        let message = counter.next_message()?;
        debug!(Step::Publish.name(); "counter {} advanced", counter.path().display());
        vcs.commit(root, &message)?;

        let branch = vcs.current_branch(root)?;
        debug!(Step::Publish.name(); "current branch: {}", branch);
        vcs.push(root, &config.publish.remote, &branch)?;

        Ok(Published { message, branch })
    }

    fn checkpoint(&self, next: Step) -> Result<(), PipelineError> {
        if (self.interrupted)() {
            return Err(PipelineError::Interrupted(next));
        }
        Ok(())
    }

    fn pause(&self) {
        let pause = self.config.pause();
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }
}
