//! Git error types.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Failure of a single `git` process.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The process could not be started.
    #[error("failed to run `git {command}`: {source}")]
    Spawn {
        /// Arguments passed to git.
        command: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The process exited unsuccessfully.
    #[error("`git {command}` exited with {status}{}", stderr_suffix(.stderr))]
    Exit {
        /// Arguments passed to git.
        command: String,
        /// Exit status of the process.
        status: ExitStatus,
        /// Captured standard error, empty when it was not captured.
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl ProcessError {
    /// Returns the captured standard error of a failed process.
    pub fn stderr(&self) -> &str {
        match self {
            Self::Spawn { .. } => "",
            Self::Exit { stderr, .. } => stderr,
        }
    }
}

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Malformed caller input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The directory already holds a git repository.
    #[error("already an initialized git repository: {0}")]
    AlreadyInitialized(PathBuf),

    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(PathBuf),

    /// A git invocation failed.
    #[error("{reason}")]
    Command {
        /// Human readable cause.
        reason: String,
        /// The failed process, if one was involved.
        #[source]
        source: Option<ProcessError>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GitError {
    pub(crate) fn command(reason: impl Into<String>, source: ProcessError) -> Self {
        Self::Command {
            reason: reason.into(),
            source: Some(source),
        }
    }
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
