//! Verification build through hugo.

use super::SiteBuilder;
use crate::{config::BuildConfig, utils::exec::Cmd};
use anyhow::Result;
use std::path::Path;

/// `hugo --gc --minify -b <base_url>` in the site root.
pub struct Hugo {
    program: String,
    args: Vec<String>,
}

impl Hugo {
    pub fn from_config(build: &BuildConfig) -> Self {
        let mut args = Vec::new();
        if build.gc {
            args.push("--gc".to_string());
        }
        if build.minify {
            args.push("--minify".to_string());
        }
        args.push("-b".to_string());
        args.push(build.base_url.clone());

        Self {
            program: build.command.clone(),
            args,
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl SiteBuilder for Hugo {
    fn build(&self, root: &Path) -> Result<()> {
        Cmd::new(&self.program).args(&self.args).cwd(root).run()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let hugo = Hugo::from_config(&BuildConfig::default());
        assert_eq!(hugo.args(), ["--gc", "--minify", "-b", "http://localhost"]);
    }

    #[test]
    fn test_flags_follow_config() {
        let build = BuildConfig {
            gc: false,
            minify: false,
            base_url: "http://127.0.0.1:1313".to_string(),
            ..BuildConfig::default()
        };
        let hugo = Hugo::from_config(&build);
        assert_eq!(hugo.args(), ["-b", "http://127.0.0.1:1313"]);
    }

    #[test]
    fn test_build_failure_propagates() {
        let build = BuildConfig {
            command: "false".to_string(),
            ..BuildConfig::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let err = Hugo::from_config(&build).build(dir.path()).unwrap_err();
        let cmd_err = err
            .downcast_ref::<crate::utils::exec::CommandError>()
            .unwrap();
        assert_eq!(cmd_err.exit_code(), Some(1));
    }
}
