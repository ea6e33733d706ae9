//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output that only appears with `--verbose`
//! - command echo (`$ rsync -av ...`) printed before every external command
//! - final success / failure lines
//!
//! # Example
//!
//! ```ignore
//! log!("sync"; "mirroring {} -> {}", src.display(), dest.display());
//! logger::success("Post update 3 -> pushed to main");
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use std::{
    fmt::Display,
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Style `text` for `stream`, honoring `--color` and terminal detection.
pub fn paint(text: impl Display, stream: Stream, style: Style) -> String {
    text.if_supports_color(stream, |t| t.style(style))
        .to_string()
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let style = match module_lower {
        "sync" | "helper" => Style::new().bright_blue(),
        "build" => Style::new().bright_magenta(),
        "git" => Style::new().bright_green(),
        "error" => Style::new().bright_red(),
        _ => Style::new().bright_yellow(),
    };
    paint(format!("[{module}]"), Stream::Stdout, style.bold())
}

/// Echo a command line before it runs.
///
/// Preceded by a blank line so the child's own output stays visually grouped.
pub fn command_line(line: &str) {
    let echo = paint(format!("$ {line}"), Stream::Stdout, Style::new().bright_cyan());
    let mut stdout = stdout().lock();
    writeln!(stdout, "\n{echo}").ok();
    stdout.flush().ok();
}

/// Print the final success line (✓ prefix, green).
pub fn success(message: &str) {
    let mark = paint("✓", Stream::Stdout, Style::new().green().bold());
    let mut stdout = stdout().lock();
    writeln!(stdout, "\n{mark} {message}").ok();
    stdout.flush().ok();
}

/// Print a failure line (✗ prefix, red) to stderr.
pub fn failure(message: &str) {
    let mark = paint("✗", Stream::Stderr, Style::new().red().bold());
    let mut stderr = std::io::stderr().lock();
    writeln!(stderr, "\n{mark} {message}").ok();
    stderr.flush().ok();
}

// ============================================================================
// Tests
// ============================================================================
