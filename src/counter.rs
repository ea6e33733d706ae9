//! Persisted commit counter.
//!
//! The counter file holds the decimal text of the last commit number used.
//! A missing or blank file reads as zero. Each call to
//! [`CommitCounter::next_message`] bumps the stored value by one, overwrites the
//! file and returns the message for that number.

use std::{
    fs, io,
    num::ParseIntError,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Counter file errors.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("counter file `{path}` does not hold a number: {content:?}")]
    Parse {
        path: PathBuf,
        content: String,
        #[source]
        source: ParseIntError,
    },

    #[error("counter file `{0}` is at its maximum value")]
    Overflow(PathBuf),
}

/// Read-increment-write counter backing the commit message.
#[derive(Debug, Clone)]
pub struct CommitCounter {
    path: PathBuf,
    prefix: String,
}

impl CommitCounter {
    pub fn new(path: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            prefix: prefix.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last used number, without touching the file.
    pub fn peek(&self) -> Result<u64, CounterError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(CounterError::Io(self.path.clone(), e)),
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed.parse().map_err(|source| CounterError::Parse {
            path: self.path.clone(),
            content: trimmed.to_string(),
            source,
        })
    }

    /// Advance the counter and return the commit message for the new value.
    pub fn next_message(&self) -> Result<String, CounterError> {
        let next = self
            .peek()?
            .checked_add(1)
            .ok_or_else(|| CounterError::Overflow(self.path.clone()))?;
        fs::write(&self.path, next.to_string())
            .map_err(|e| CounterError::Io(self.path.clone(), e))?;
        Ok(self.format(next))
    }

    fn format(&self, n: u64) -> String {
        format!("{} {n}", self.prefix)
    }
}
