//! Git operations for publishing the site.
//!
//! Handles staging, committing, branch detection and pushing by driving the
//! `git` client in the site root.

use super::Vcs;
use crate::{exec, utils::exec::Cmd};
use anyhow::{Result, bail};
use std::path::Path;

/// The git command-line client.
pub struct Git {
    program: String,
}

impl Git {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Vcs for Git {
    fn stage_all(&self, root: &Path) -> Result<()> {
        exec!(root; &self.program; "add", ".")?;
        Ok(())
    }

    fn commit(&self, root: &Path, message: &str) -> Result<()> {
        if message.trim().is_empty() {
            bail!("Commit message cannot be empty");
        }
        exec!(root; &self.program; "commit", "-m", message)?;
        Ok(())
    }

    fn current_branch(&self, root: &Path) -> Result<String> {
        let branch = Cmd::new(&self.program)
            .args(["rev-parse", "--abbrev-ref", "HEAD"])
            .cwd(root)
            .quiet(true)
            .output()?;
        if branch.is_empty() {
            bail!("git reported an empty branch name");
        }
        Ok(branch)
    }

    fn push(&self, root: &Path, remote: &str, branch: &str) -> Result<()> {
        exec!(root; &self.program; "push", remote, branch)?;
        Ok(())
    }
}
