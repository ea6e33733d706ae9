//! sitepush - mirror notes into a static site, verify the build, commit and push.

mod cli;
mod config;
mod core;
mod counter;
mod logger;
mod pipeline;
mod tools;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::SiteConfig;
use pipeline::{Pipeline, Published};
use std::process::ExitCode;
use tools::SystemTools;
use utils::exec::CommandError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match run(&cli) {
        Ok(published) => {
            logger::success(&success_line(&published));
            ExitCode::SUCCESS
        }
        Err(err) => {
            logger::failure(&failure_line(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Published> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let config = SiteConfig::load(cli)?;
    let tools = SystemTools::from_config(&config);
    Pipeline::new(&config, tools.toolchain()).run()
}

fn success_line(published: &Published) -> String {
    format!("done: {} -> pushed to {}", published.message, published.branch)
}

/// Single error boundary: a command that exited non-zero gets a clean
/// one-line report, everything else prints its full cause chain.
fn failure_line(err: &anyhow::Error) -> String {
    match err.downcast_ref::<CommandError>().and_then(CommandError::exit_code) {
        Some(code) => format!("command failed with exit-code {code}"),
        None => format!("{err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterError;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_success_line() {
        let published = Published {
            message: "Post update 7".to_string(),
            branch: "main".to_string(),
        };
        assert_eq!(success_line(&published), "done: Post update 7 -> pushed to main");
    }

    #[test]
    fn test_exit_code_failure_line() {
        let err = anyhow::Error::new(CommandError::Exit {
            program: "hugo".to_string(),
            code: 255,
        });
        assert_eq!(failure_line(&err), "command failed with exit-code 255");
    }

    #[test]
    fn test_exit_code_survives_context() {
        let err = Err::<(), _>(CommandError::Exit {
            program: "git".to_string(),
            code: 1,
        })
        .context("publishing")
        .unwrap_err();
        assert_eq!(failure_line(&err), "command failed with exit-code 1");
    }

    #[test]
    fn test_spawn_failure_prints_chain() {
        let err = anyhow::Error::new(CommandError::Spawn {
            program: "rsync".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
        assert_eq!(failure_line(&err), "failed to execute `rsync`: no such file");
    }

    #[test]
    fn test_counter_failure_prints_chain() {
        let parse = "x".parse::<u64>().unwrap_err();
        let err = anyhow::Error::new(CounterError::Parse {
            path: PathBuf::from(".commit_counter"),
            content: "x".to_string(),
            source: parse,
        });
        let line = failure_line(&err);
        assert!(line.starts_with("counter file `.commit_counter` does not hold a number: \"x\""));
        assert!(line.contains("invalid digit"));
    }
}
