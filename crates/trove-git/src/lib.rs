//! Git primitives for Trove.
//!
//! This crate drives the `git` command line:
//! - Repository detection and initialization
//! - Config reads and writes
//! - Committing, optionally letting the user edit the message
//! - Discarding a file's uncommitted changes

mod command;
mod error;
mod prompt;
mod repository;
mod request;

pub use error::{GitError, GitResult, ProcessError};
pub use prompt::{Prompter, TerminalPrompter};
pub use repository::{GIT_DIR_NAME, Repository, is_repository};
pub use request::{CommitRequest, CommitScope, InitOptions};
