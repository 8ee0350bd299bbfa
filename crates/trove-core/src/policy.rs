//! Committing the effects of successful commands.
//!
//! A [`CommitPolicy`] runs a command, and if git integration is enabled and
//! the command reports success, commits the files the command is known to
//! modify. When the commit fails, the files are reverted so the working tree
//! matches the last commit again.

use std::error::Error;
use std::path::PathBuf;

use tracing::{debug, error, warn};
use trove_config::{GitIntegrationContext, PROJECT_FILE_NAME};
use trove_git::{CommitRequest, CommitScope, GitError, Repository};

use crate::{CommandReturn, CoreError, CoreResult, MessageTemplate};

/// Why no commit was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Git integration is turned off.
    GitDisabled,
    /// The command's code is not a success code.
    Unsuccessful,
    /// The command asked not to commit.
    Declined,
}

/// What happened after a command ran.
#[derive(Debug)]
pub enum CommitOutcome<C> {
    /// Nothing was committed; `code` is the command's code.
    Skipped {
        /// The command's code.
        code: C,
        /// Why the commit was skipped.
        reason: SkipReason,
    },

    /// The changes were committed; `code` is the command's code.
    Committed {
        /// The command's code.
        code: C,
    },

    /// The commit failed and the changes were discarded.
    RolledBack {
        /// The policy's failure code.
        code: C,
        /// The command's own code.
        original: C,
        /// Why the commit failed.
        error: GitError,
    },

    /// The commit failed and discarding the changes failed too.
    ///
    /// The working tree may still hold some of the command's changes.
    RollbackFailed {
        /// The command's code.
        code: C,
        /// Why the commit failed.
        commit_error: GitError,
        /// Why the rollback failed.
        rollback_error: GitError,
    },
}

impl<C> CommitOutcome<C> {
    /// Returns the code callers should act on.
    ///
    /// This is the command's code, except after a successful rollback where
    /// it is the policy's failure code.
    pub fn code(&self) -> &C {
        match self {
            Self::Skipped { code, .. }
            | Self::Committed { code }
            | Self::RolledBack { code, .. }
            | Self::RollbackFailed { code, .. } => code,
        }
    }

    /// Consumes the outcome, returning [`code`](Self::code).
    pub fn into_code(self) -> C {
        match self {
            Self::Skipped { code, .. }
            | Self::Committed { code }
            | Self::RolledBack { code, .. }
            | Self::RollbackFailed { code, .. } => code,
        }
    }

    /// Returns whether a commit was made.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

type SuccessPredicate<C> = Box<dyn Fn(&C) -> bool>;

/// Commits the files a command modifies after the command succeeds.
///
/// `A` is the command's argument type, `C` its status code type.
pub struct CommitPolicy<A, C = i32> {
    is_success: SuccessPredicate<C>,
    files: Vec<PathBuf>,
    message: MessageTemplate<A>,
    failed: C,
}

/// Builder for [`CommitPolicy`].
pub struct CommitPolicyBuilder<A, C> {
    is_success: Option<SuccessPredicate<C>>,
    files: Vec<PathBuf>,
    message: MessageTemplate<A>,
    failed: C,
}

impl<A, C> CommitPolicy<A, C> {
    /// Starts a policy committing with `message` and returning `failed` after
    /// a rollback.
    pub fn builder(message: MessageTemplate<A>, failed: C) -> CommitPolicyBuilder<A, C> {
        CommitPolicyBuilder {
            is_success: None,
            files: Vec::new(),
            message,
            failed,
        }
    }

    /// Returns the files committed and, on failure, discarded.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns the message template.
    pub fn message(&self) -> &MessageTemplate<A> {
        &self.message
    }
}

impl<A, C: Clone + PartialEq + 'static> CommitPolicyBuilder<A, C> {
    /// Commits only when the command returns one of `codes`.
    #[must_use]
    pub fn successful_returns(mut self, codes: impl IntoIterator<Item = C>) -> Self {
        let codes: Vec<C> = codes.into_iter().collect();
        self.is_success = Some(Box::new(move |code| codes.contains(code)));
        self
    }

    /// Commits only when `predicate` holds for the command's code.
    #[must_use]
    pub fn success_when(mut self, predicate: impl Fn(&C) -> bool + 'static) -> Self {
        self.is_success = Some(Box::new(predicate));
        self
    }

    /// Adds files to commit, in order.
    #[must_use]
    pub fn files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Builds the policy.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Policy`] if no success condition or no file was
    /// given.
    pub fn build(self) -> CoreResult<CommitPolicy<A, C>> {
        let Some(is_success) = self.is_success else {
            return Err(CoreError::Policy(
                "no successful return values configured".to_string(),
            ));
        };
        if self.files.is_empty() {
            return Err(CoreError::Policy("no files to commit".to_string()));
        }

        Ok(CommitPolicy {
            is_success,
            files: self.files,
            message: self.message,
            failed: self.failed,
        })
    }
}

impl<A, C: Clone> CommitPolicy<A, C> {
    /// Runs `command` with `args`, then commits its changes if appropriate.
    ///
    /// Errors from `command` are returned as they are and nothing is
    /// committed. Git failures are reported and folded into the outcome.
    ///
    /// # Errors
    ///
    /// Returns the command's own error.
    pub fn run<R, E, F>(
        &self,
        context: &GitIntegrationContext,
        repo: &Repository,
        args: &A,
        command: F,
    ) -> Result<CommitOutcome<C>, E>
    where
        F: FnOnce(&A) -> Result<R, E>,
        R: CommandReturn<Code = C>,
    {
        let result = command(args)?;
        Ok(self.settle(context, repo, args, &result))
    }

    fn settle<R>(
        &self,
        context: &GitIntegrationContext,
        repo: &Repository,
        args: &A,
        result: &R,
    ) -> CommitOutcome<C>
    where
        R: CommandReturn<Code = C>,
    {
        let code = result.code();

        if !context.enabled() {
            return skip(code, SkipReason::GitDisabled);
        }
        if !(self.is_success)(&code) {
            return skip(code, SkipReason::Unsuccessful);
        }
        if !result.should_commit() {
            return skip(code, SkipReason::Declined);
        }

        let message = match result.commit_message() {
            Some(message) => message.to_string(),
            None => self.message.resolve(args),
        };
        let request = CommitRequest::new(message, self.scope(result.commit_files()));

        match repo.commit(&request, context.non_interactive()) {
            Ok(()) => CommitOutcome::Committed { code },
            Err(commit_error) => {
                error!(error = &commit_error as &dyn Error, "commit failed");
                self.roll_back(repo, code, commit_error, result.commit_files())
            }
        }
    }

    fn scope(&self, extra: &[PathBuf]) -> CommitScope {
        let mut files = self.files.clone();
        for file in extra {
            if !files.contains(file) {
                files.push(file.clone());
            }
        }
        CommitScope::Files(files)
    }

    /// Discards the policy's files and unstages `extra`, stopping at the
    /// first failure.
    ///
    /// Extra files keep their working tree content but leave the index, so
    /// a later commit does not pick them up.
    fn roll_back(
        &self,
        repo: &Repository,
        original: C,
        commit_error: GitError,
        extra: &[PathBuf],
    ) -> CommitOutcome<C> {
        let discarded = self.files.iter().map(|file| repo.discard_changes(file));
        let unstaged = extra
            .iter()
            .filter(|file| !self.files.contains(file))
            .map(|file| repo.unstage(file));

        for step in discarded.chain(unstaged) {
            if let Err(rollback_error) = step {
                error!(error = &rollback_error as &dyn Error, "rollback failed");
                return CommitOutcome::RollbackFailed {
                    code: original,
                    commit_error,
                    rollback_error,
                };
            }
        }

        warn!("Failed to commit changes, discarding them...");
        CommitOutcome::RolledBack {
            code: self.failed.clone(),
            original,
            error: commit_error,
        }
    }
}

fn skip<C>(code: C, reason: SkipReason) -> CommitOutcome<C> {
    debug!(?reason, "not committing");
    CommitOutcome::Skipped { code, reason }
}

/// The policy for top-level commands: code `0` is success, the project file
/// is committed, and `0` is returned after a rollback.
pub fn commit_after_command<A>(message: MessageTemplate<A>) -> CommitPolicy<A, i32> {
    CommitPolicy {
        is_success: Box::new(|code| *code == 0),
        files: vec![PathBuf::from(PROJECT_FILE_NAME)],
        message,
        failed: 0,
    }
}
