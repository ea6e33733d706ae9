//! External command execution utilities.
//!
//! Provides a Builder-based API for running external programs. Every command
//! line is echoed before it runs; output streams straight to the terminal
//! unless captured with [`Cmd::output`].
//!
//! # Examples
//!
//! ```ignore
//! use crate::utils::exec::Cmd;
//!
//! // Streamed command
//! Cmd::new("rsync").args(["-av", "--delete"]).arg(src).arg(dest).run()?;
//!
//! // With working directory
//! Cmd::new("hugo").args(["--gc", "--minify"]).cwd(root).run()?;
//!
//! // Captured stdout
//! let branch = Cmd::new("git")
//!     .args(["rev-parse", "--abbrev-ref", "HEAD"])
//!     .cwd(root)
//!     .quiet(true)
//!     .output()?;
//! ```

use crate::logger;
use std::{
    ffi::{OsStr, OsString},
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Failure of an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to execute `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with code {code}")]
    Exit { program: String, code: i32 },

    #[error("`{program}` was terminated by a signal")]
    Signal { program: String },
}

impl CommandError {
    /// Exit code of the child, if it exited normally.
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exit { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Name of the program that failed.
    pub fn program(&self) -> &str {
        match self {
            Self::Spawn { program, .. } | Self::Exit { program, .. } | Self::Signal { program } => {
                program
            }
        }
    }

    fn from_status(program: String, status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Exit { program, code },
            None => Self::Signal { program },
        }
    }
}

// ============================================================================
// Builder API
// ============================================================================

/// Command builder for external process execution.
///
/// Provides a fluent API for configuring and running external commands.
#[derive(Debug, Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    envs: Vec<(String, String)>,
    quiet: bool,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            ..Default::default()
        }
    }

    /// Add a single argument.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        let arg = arg.as_ref();
        if !arg.is_empty() {
            self.args.push(arg.to_owned());
        }
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            let arg = arg.as_ref();
            if !arg.is_empty() {
                self.args.push(arg.to_owned());
            }
        }
        self
    }

    /// Set working directory.
    pub fn cwd<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_owned());
        self
    }

    /// Set environment variables for the subprocess.
    pub fn envs<K, V, I>(mut self, vars: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (k, v) in vars {
            self.envs.push((k.as_ref().to_owned(), v.as_ref().to_owned()));
        }
        self
    }

    /// Skip echoing the command line.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Command line as shown to the user.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run with inherited stdout/stderr and wait for completion.
    pub fn run(self) -> Result<(), CommandError> {
        let name = self.program_name();
        let mut cmd = self.prepare();
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());

        let status = cmd.status().map_err(|source| CommandError::Spawn {
            program: name.clone(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::from_status(name, status))
        }
    }

    /// Run with stdout captured, returning it trimmed.
    ///
    /// Stderr is still inherited so diagnostics reach the terminal.
    pub fn output(self) -> Result<String, CommandError> {
        let name = self.program_name();
        let mut cmd = self.prepare();
        cmd.stdout(Stdio::piped()).stderr(Stdio::inherit());

        let output = cmd.output().map_err(|source| CommandError::Spawn {
            program: name.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(CommandError::from_status(name, output.status));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

// ============================================================================
// Macro helper traits
// ============================================================================

/// Create a command from a single program name.
///
/// This is a helper for the `exec!` macro.
#[inline]
pub fn cmd<S: AsRef<OsStr>>(program: S) -> Cmd {
    Cmd::new(program)
}

impl Cmd {
    /// Get the program name for error messages.
    fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    /// Echo the command line and build the std command.
    fn prepare(&self) -> Command {
        if !self.quiet {
            logger::command_line(&self.display());
        }

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .envs(self.envs.iter().cloned())
            .stdin(Stdio::inherit());

        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

// ============================================================================
// Macro (syntax sugar for simple cases)
// ============================================================================

/// Run an external command with arguments, streaming its output.
///
/// # Syntax
///
/// ```ignore
/// // Simple: command and args
/// exec!("git"; "status", "-s")?;
///
/// // With working directory
/// exec!(root; "git"; "add", ".")?;
/// ```
#[macro_export]
macro_rules! exec {
    // root + single cmd
    ($root:expr; $cmd:expr; $($arg:expr),* $(,)?) => {
        $crate::utils::exec::cmd($cmd)
            $(.arg($arg))*
            .cwd($root)
            .run()
    };

    // single cmd only
    ($cmd:expr; $($arg:expr),* $(,)?) => {
        $crate::utils::exec::cmd($cmd)
            $(.arg($arg))*
            .run()
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_builder() {
        let cmd = Cmd::new("echo")
            .arg("hello")
            .args(["world", "!"])
            .cwd("/tmp");

        assert_eq!(cmd.program, OsString::from("echo"));
        assert_eq!(cmd.args.len(), 3);
        assert_eq!(cmd.cwd, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_empty_args_filtered() {
        let cmd = Cmd::new("echo").arg("").args(["a", "", "b"]);
        assert_eq!(cmd.args.len(), 2);
    }

    #[test]
    fn test_display_joins_program_and_args() {
        let cmd = Cmd::new("rsync").args(["-av", "--delete", "/a/", "/b"]);
        assert_eq!(cmd.display(), "rsync -av --delete /a/ /b");
    }

    #[test]
    fn test_run_success() {
        Cmd::new("echo").arg("hello").run().unwrap();
    }

    #[test]
    fn test_run_reports_exit_code() {
        let err = Cmd::new("sh").args(["-c", "exit 3"]).run().unwrap_err();
        assert_eq!(err.exit_code(), Some(3));
        assert_eq!(err.program(), "sh");
        assert_eq!(err.to_string(), "`sh` exited with code 3");
    }

    #[test]
    fn test_spawn_failure() {
        let err = Cmd::new("sitepush-no-such-program").run().unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn test_output_captures_trimmed_stdout() {
        let out = Cmd::new("echo").arg("main").quiet(true).output().unwrap();
        assert_eq!(out, "main");
    }

    #[test]
    fn test_output_uses_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();
        let out = Cmd::new("ls").cwd(dir.path()).quiet(true).output().unwrap();
        assert_eq!(out, "marker.txt");
    }

    #[test]
    fn test_envs_reach_child() {
        let out = Cmd::new("sh")
            .args(["-c", "printf %s \"$SITEPUSH_TEST\""])
            .envs([("SITEPUSH_TEST", "value")])
            .quiet(true)
            .output()
            .unwrap();
        assert_eq!(out, "value");
    }

    #[test]
    fn test_exec_macro_with_root() {
        let dir = tempfile::tempdir().unwrap();
        exec!(dir.path(); "sh"; "-c", "touch created").unwrap();
        assert!(dir.path().join("created").exists());
    }
}
