//! Inputs to repository operations.

use std::path::PathBuf;

use crate::{GitError, GitResult};

/// Which changes a commit stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitScope {
    /// Every change in the working tree (`git add --all`).
    All,
    /// Only the listed paths, staged in order. Never empty.
    Files(Vec<PathBuf>),
}

impl CommitScope {
    /// Creates a scope limited to the given paths.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidArgument`] if no path is given.
    pub fn files<I, P>(paths: I) -> GitResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        if paths.is_empty() {
            return Err(GitError::InvalidArgument(
                "commit scope must name at least one file".to_string(),
            ));
        }
        Ok(Self::Files(paths))
    }
}

/// A commit to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    /// Commit message, used as the default when the user may edit it.
    pub message: String,
    /// Changes to stage.
    pub scope: CommitScope,
    /// Whether the user may be offered to edit the message.
    pub interactive: bool,
}

impl CommitRequest {
    /// Creates an interactive request.
    pub fn new(message: impl Into<String>, scope: CommitScope) -> Self {
        Self {
            message: message.into(),
            scope,
            interactive: true,
        }
    }

    /// Sets whether the user may edit the message.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}

/// Options for [`Repository::init`](crate::Repository::init).
///
/// `user_name` and `user_email` go together: give both or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// Value for `user.name`.
    pub user_name: Option<String>,
    /// Value for `user.email`.
    pub user_email: Option<String>,
    /// Contents of `.git/description`.
    pub description: Option<String>,
}

impl InitOptions {
    /// Sets the commit identity.
    #[must_use]
    pub fn user(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self.user_email = Some(email.into());
        self
    }

    /// Sets the repository description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn validate(&self) -> GitResult<()> {
        if self.user_name.is_some() != self.user_email.is_some() {
            return Err(GitError::InvalidArgument(
                "both user name and user email must be given or none can be given".to_string(),
            ));
        }
        Ok(())
    }
}
