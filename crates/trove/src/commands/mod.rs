//! CLI commands.

pub mod add;
pub mod init;
pub mod remove;
pub mod set_description;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::debug;
use trove_config::{
    GitIntegrationContext, GitOverrides, ProjectConfig, find_project_file, load_project,
    save_project,
};
use trove_core::{CommandResult, CommandReturn, CommitOutcome, CommitPolicy};
use trove_git::Repository;

/// An opened project: its file, its contents and its repository.
pub struct Session {
    path: PathBuf,
    project: ProjectConfig,
    repo: Repository,
    context: GitIntegrationContext,
}

impl Session {
    /// Opens the project containing the current directory.
    pub fn open(overrides: &GitOverrides) -> Result<Self> {
        let path = find_project_file().context("no trove.json found, run `trove init` first")?;
        let project = load_project(&path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        let root = path.parent().map_or_else(PathBuf::new, Path::to_path_buf);
        let context = GitIntegrationContext::resolve(Some(&project), overrides);
        debug!(?path, ?context, "opened project");

        Ok(Self {
            path,
            project,
            repo: Repository::new(root),
            context,
        })
    }

    /// Runs a mutating command under `policy`.
    ///
    /// The project file is saved when the command succeeds with changes, and
    /// `--git-commit-message` replaces whatever message would be used.
    pub fn run_committed<A>(
        self,
        policy: &CommitPolicy<A>,
        args: &A,
        overrides: &GitOverrides,
        command: impl FnOnce(&mut ProjectConfig, &A) -> Result<CommandResult>,
    ) -> Result<i32> {
        let Self {
            path,
            mut project,
            repo,
            context,
        } = self;

        let outcome = policy.run(&context, &repo, args, |args| {
            let result = command(&mut project, args)?;
            if result.code() == 0 && result.should_commit() {
                save_project(&path, &project)
                    .with_context(|| format!("failed to save {}", path.display()))?;
            }
            Ok::<_, anyhow::Error>(with_message_override(result, overrides))
        })?;

        exit_code(outcome)
    }
}

/// Applies `--git-commit-message`, if given.
pub fn with_message_override(result: CommandResult, overrides: &GitOverrides) -> CommandResult {
    match &overrides.commit_message {
        Some(message) => result.with_message(message.clone()),
        None => result,
    }
}

/// Maps a commit outcome to the process exit code.
///
/// A rollback that could not complete is an error: the working tree no
/// longer matches the last commit.
pub fn exit_code(outcome: CommitOutcome<i32>) -> Result<i32> {
    match outcome {
        CommitOutcome::RollbackFailed {
            commit_error,
            rollback_error,
            ..
        } => Err(anyhow!(rollback_error).context(format!(
            "{commit_error}, and the changes could not be discarded"
        ))),
        other => Ok(other.into_code()),
    }
}

/// Returns `"s"` unless there is exactly one item.
pub fn plural_suffix(count: usize) -> String {
    if count == 1 { "" } else { "s" }.to_string()
}
