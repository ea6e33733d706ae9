//! External tools driven by the pipeline.
//!
//! Each tool sits behind a narrow trait so the pipeline's sequencing can be
//! exercised without the real programs installed:
//!
//! | Trait          | Real implementation | Program  |
//! |----------------|---------------------|----------|
//! | `Mirror`       | [`Rsync`]           | `rsync`  |
//! | `ScriptRunner` | [`Interpreter`]     | `python3`|
//! | `SiteBuilder`  | [`Hugo`]            | `hugo`   |
//! | `Vcs`          | [`Git`]             | `git`    |
//!
//! Every method returns `anyhow::Result`; a failing program surfaces as a
//! [`CommandError`](crate::utils::exec::CommandError) inside it.

mod git;
mod helper;
mod hugo;
mod rsync;

pub use git::Git;
pub use helper::Interpreter;
pub use hugo::Hugo;
pub use rsync::Rsync;

use crate::{config::SiteConfig, debug};
use anyhow::Result;
use std::path::Path;

/// One-way directory mirror.
pub trait Mirror {
    /// Make `dest` an exact copy of the contents of `source`.
    fn mirror(&self, source: &Path, dest: &Path) -> Result<()>;
}

/// Runs a helper script.
pub trait ScriptRunner {
    fn run_script(&self, script: &Path, cwd: &Path) -> Result<()>;
}

/// Static-site build used as a verification pass.
pub trait SiteBuilder {
    fn build(&self, root: &Path) -> Result<()>;
}

/// Version-control operations on the site repository.
pub trait Vcs {
    fn stage_all(&self, root: &Path) -> Result<()>;
    fn commit(&self, root: &Path, message: &str) -> Result<()>;
    /// Name of the checked-out branch.
    fn current_branch(&self, root: &Path) -> Result<String>;
    fn push(&self, root: &Path, remote: &str, branch: &str) -> Result<()>;
}

/// The set of tools a pipeline run uses.
pub struct Toolchain<'a> {
    pub mirror: &'a dyn Mirror,
    pub helper: &'a dyn ScriptRunner,
    pub builder: &'a dyn SiteBuilder,
    pub vcs: &'a dyn Vcs,
}

/// Real tools configured from `sitepush.toml`.
pub struct SystemTools {
    pub rsync: Rsync,
    pub interpreter: Interpreter,
    pub hugo: Hugo,
    pub git: Git,
}

impl SystemTools {
    pub fn from_config(config: &SiteConfig) -> Self {
        let tools = Self {
            rsync: Rsync::new(&config.sync.command),
            interpreter: Interpreter::new(&config.helper.interpreter)
                .with_var("SITEPUSH_ROOT", config.get_root().display().to_string())
                .with_var("SITEPUSH_POSTS", config.paths.dest.display().to_string()),
            hugo: Hugo::from_config(&config.build),
            git: Git::new(&config.publish.command),
        };
        debug!("config"; "sync: {}", tools.rsync.program());
        debug!("config"; "helper: {}", tools.interpreter.program());
        debug!("config"; "build: {} {}", config.build.command, tools.hugo.args().join(" "));
        debug!("config"; "publish: {}", tools.git.program());
        tools
    }

    pub fn toolchain(&self) -> Toolchain<'_> {
        Toolchain {
            mirror: &self.rsync,
            helper: &self.interpreter,
            builder: &self.hugo,
            vcs: &self.git,
        }
    }
}
