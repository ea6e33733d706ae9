//! Helper script invocation.

use super::ScriptRunner;
use crate::utils::exec::Cmd;
use anyhow::Result;
use std::path::Path;

/// Runs `<program> <script>` in the site root.
///
/// The script gets no arguments. `$SITEPUSH_*` variables describe the site.
pub struct Interpreter {
    program: String,
    vars: Vec<(String, String)>,
}

impl Interpreter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            vars: Vec::new(),
        }
    }

    /// Add an environment variable for the script.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ScriptRunner for Interpreter {
    fn run_script(&self, script: &Path, cwd: &Path) -> Result<()> {
        Cmd::new(&self.program)
            .arg(script)
            .cwd(cwd)
            .envs(self.vars.iter().map(|(k, v)| (k, v)))
            .run()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_script_runs_in_cwd_with_vars() {
        let site = tempfile::tempdir().unwrap();
        let script = site.path().join("images.sh");
        fs::write(&script, "printf %s \"$SITEPUSH_ROOT\" > ran.txt\n").unwrap();

        Interpreter::new("sh")
            .with_var("SITEPUSH_ROOT", "/the/root")
            .run_script(&script, site.path())
            .unwrap();

        assert_eq!(
            fs::read_to_string(site.path().join("ran.txt")).unwrap(),
            "/the/root"
        );
    }

    #[test]
    fn test_script_failure_propagates() {
        let site = tempfile::tempdir().unwrap();
        let script = site.path().join("images.sh");
        fs::write(&script, "exit 4\n").unwrap();

        let err = Interpreter::new("sh")
            .run_script(&script, site.path())
            .unwrap_err();
        let cmd_err = err
            .downcast_ref::<crate::utils::exec::CommandError>()
            .unwrap();
        assert_eq!(cmd_err.exit_code(), Some(4));
    }
}
