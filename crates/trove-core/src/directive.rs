//! What a command returns to the commit policy.

use std::path::PathBuf;

/// A command's return value, as seen by the commit policy.
///
/// The policy decides eligibility on [`code`](CommandReturn::code). Richer
/// results can additionally veto the commit, supply the message, or name
/// extra files to include.
pub trait CommandReturn {
    /// The comparable status code.
    type Code: Clone + PartialEq;

    /// Returns the status code.
    fn code(&self) -> Self::Code;

    /// Returns whether the command wants its changes committed.
    fn should_commit(&self) -> bool {
        true
    }

    /// Returns a message that replaces the policy's template.
    fn commit_message(&self) -> Option<&str> {
        None
    }

    /// Returns files to commit in addition to the policy's files.
    fn commit_files(&self) -> &[PathBuf] {
        &[]
    }
}

impl CommandReturn for i32 {
    type Code = i32;

    fn code(&self) -> i32 {
        *self
    }
}

impl CommandReturn for bool {
    type Code = bool;

    fn code(&self) -> bool {
        *self
    }
}

/// A return code plus instructions for the commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Status code, `0` on success.
    pub return_code: i32,
    /// Whether to commit at all.
    pub do_commit: bool,
    /// Message overriding the policy's template.
    pub commit_message: Option<String>,
    /// Extra files to stage.
    pub commit_files: Vec<PathBuf>,
}

impl CommandResult {
    /// A result that commits with the policy's defaults.
    pub fn new(return_code: i32) -> Self {
        Self {
            return_code,
            do_commit: true,
            commit_message: None,
            commit_files: Vec::new(),
        }
    }

    /// A successful result with nothing to commit.
    pub fn unchanged() -> Self {
        Self {
            do_commit: false,
            ..Self::new(0)
        }
    }

    /// Replaces the commit message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = Some(message.into());
        self
    }

    /// Adds files to the commit.
    #[must_use]
    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.commit_files.extend(files.into_iter().map(Into::into));
        self
    }
}

impl CommandReturn for CommandResult {
    type Code = i32;

    fn code(&self) -> i32 {
        self.return_code
    }

    fn should_commit(&self) -> bool {
        self.do_commit
    }

    fn commit_message(&self) -> Option<&str> {
        self.commit_message.as_deref()
    }

    fn commit_files(&self) -> &[PathBuf] {
        &self.commit_files
    }
}
