//! Repository primitives.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::command::GitCommand;
use crate::{
    CommitRequest, CommitScope, GitError, GitResult, InitOptions, ProcessError, Prompter,
    TerminalPrompter,
};

/// Name of the repository marker directory.
pub const GIT_DIR_NAME: &str = ".git";

/// What git prints when a commit template comes back from the editor untouched.
const UNEDITED_MESSAGE_SIGNAL: &str = "did not edit the message";

/// Returns whether `path` is the root of a git repository.
pub fn is_repository(path: impl AsRef<Path>) -> bool {
    path.as_ref().join(GIT_DIR_NAME).is_dir()
}

/// A git working directory.
///
/// The handle only remembers where the repository lives; every operation
/// runs `git` afresh in that directory.
pub struct Repository {
    workdir: PathBuf,
    prompter: Box<dyn Prompter>,
}

impl Repository {
    /// Creates a handle for the given directory, prompting on the terminal.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            prompter: Box::new(TerminalPrompter),
        }
    }

    /// Creates a handle for the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current() -> GitResult<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Replaces the prompter used by interactive commits.
    #[must_use]
    pub fn with_prompter(mut self, prompter: impl Prompter + 'static) -> Self {
        self.prompter = Box::new(prompter);
        self
    }

    /// Returns the working directory.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Returns the repository metadata directory.
    pub fn git_dir(&self) -> PathBuf {
        self.workdir.join(GIT_DIR_NAME)
    }

    /// Returns whether the working directory is a git repository.
    pub fn is_repository(&self) -> bool {
        is_repository(&self.workdir)
    }

    fn git(&self) -> GitCommand<'_> {
        GitCommand::new(&self.workdir)
    }

    /// Reads a config value, `None` if it is unset or git fails.
    pub fn get_config_value(&self, key: &str) -> Option<String> {
        match self.git().args(["config", key]).checked() {
            Ok(output) => Some(String::from_utf8_lossy(&output.stdout).trim().to_string()),
            Err(e) => {
                debug!(key, error = %e, "config value not available");
                None
            }
        }
    }

    /// Writes a config value.
    ///
    /// Returns `false` instead of an error when git fails; callers that need
    /// the write must check the result.
    pub fn set_config_value(&self, key: &str, value: &str) -> bool {
        match self.git().args(["config", key, value]).checked() {
            Ok(_) => true,
            Err(e) => {
                warn!(key, error = %e, "failed to set config value");
                false
            }
        }
    }

    /// Initializes a repository in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidArgument`] if only one of user name and email
    /// is given, [`GitError::AlreadyInitialized`] if a repository already
    /// exists, and [`GitError::Command`] if git fails.
    pub fn init(&self, options: &InitOptions) -> GitResult<()> {
        options.validate()?;

        if self.is_repository() {
            return Err(GitError::AlreadyInitialized(self.workdir.clone()));
        }

        // git init prints branch-name hints on stderr
        self.git()
            .arg("init")
            .discard_stderr()
            .checked()
            .map_err(|e| GitError::command("Failed to initialize git repository", e))?;

        if let (Some(name), Some(email)) = (&options.user_name, &options.user_email) {
            for (key, value) in [("user.name", name), ("user.email", email)] {
                self.git()
                    .args(["config", key, value.as_str()])
                    .checked()
                    .map_err(|e| GitError::command("Failed to set user name and email", e))?;
            }
        }

        if let Some(description) = &options.description {
            fs::write(self.git_dir().join("description"), format!("{description}\n"))?;
        }

        info!(workdir = ?self.workdir, "initialized git repository");
        Ok(())
    }

    /// Stages the request's scope and commits it.
    ///
    /// Unless `non_interactive` is set, an interactive request first asks
    /// whether the user wants to edit the message. An editor session that
    /// leaves the message untouched commits the default message.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepo`] outside a repository, and
    /// [`GitError::Command`] if staging or committing fails.
    pub fn commit(&self, request: &CommitRequest, non_interactive: bool) -> GitResult<()> {
        let edit_message = if request.interactive && !non_interactive {
            let question = format!(
                "The default commit message is '{}' - edit it?",
                request.message
            );
            self.prompter.confirm(&question, false)?
        } else {
            false
        };

        if !self.is_repository() {
            return Err(GitError::NotARepo(self.workdir.clone()));
        }

        self.stage(&request.scope)?;

        if edit_message && self.commit_with_editor(&request.message)? {
            info!("committed changes with edited message");
            return Ok(());
        }

        self.git()
            .args(["commit", "-F-"])
            .input(&request.message)
            .checked()
            .map_err(|e| GitError::command("Failed to commit changes", e))?;

        info!(message = %request.message, "committed changes");
        Ok(())
    }

    fn stage(&self, scope: &CommitScope) -> GitResult<()> {
        match scope {
            CommitScope::All => {
                self.git()
                    .args(["add", "--all"])
                    .checked()
                    .map_err(|e| GitError::command("Failed to add all to commit", e))?;
            }
            CommitScope::Files(paths) if paths.is_empty() => {
                return Err(GitError::InvalidArgument(
                    "commit scope must name at least one file".to_string(),
                ));
            }
            CommitScope::Files(paths) => {
                for path in paths {
                    self.git()
                        .arg("add")
                        .arg("--")
                        .arg(path)
                        .checked()
                        .map_err(|e| {
                            GitError::command(
                                format!("Failed to add {} to commit", path.display()),
                                e,
                            )
                        })?;
                }
            }
        }
        Ok(())
    }

    /// Commits through the editor, seeded with `message`.
    ///
    /// Returns `false` if the user left the message unedited and nothing was
    /// committed.
    fn commit_with_editor(&self, message: &str) -> GitResult<bool> {
        let mut template = tempfile::Builder::new()
            .prefix("commit-msg")
            .tempfile_in(self.git_dir())?;
        template.write_all(message.as_bytes())?;
        template.flush()?;
        let template_path = std::path::absolute(template.path())?;

        let result = self
            .git()
            .arg("commit")
            .arg("--template")
            .arg(&template_path)
            .on_terminal()
            .run();

        if let Err(e) = template.close() {
            warn!(path = ?template_path, error = %e, "failed to remove commit template");
        }

        let output = result.map_err(|e| GitError::command("Failed to commit changes", e))?;
        if output.status.success() {
            return Ok(true);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.contains(UNEDITED_MESSAGE_SIGNAL) {
            debug!("commit message left unedited, using the default");
            return Ok(false);
        }

        Err(GitError::command(
            "Failed to commit changes",
            ProcessError::Exit {
                command: format!("commit --template {}", template_path.display()),
                status: output.status,
                stderr,
            },
        ))
    }

    /// Reverts `path` to its last committed state.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Command`] naming the file if git fails.
    pub fn discard_changes(&self, path: impl AsRef<Path>) -> GitResult<()> {
        let path = path.as_ref();
        self.git()
            .args(["checkout", "HEAD", "--"])
            .arg(path)
            .checked()
            .map_err(|e| {
                GitError::command(
                    format!("Failed to discard changes in file '{}'", path.display()),
                    e,
                )
            })?;

        debug!(?path, "discarded changes");
        Ok(())
    }

    /// Removes `path` from the index, keeping its working tree content.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Command`] naming the file if git fails.
    pub fn unstage(&self, path: impl AsRef<Path>) -> GitResult<()> {
        let path = path.as_ref();
        self.git()
            .args(["reset", "-q", "--"])
            .arg(path)
            .checked()
            .map_err(|e| {
                GitError::command(format!("Failed to unstage file '{}'", path.display()), e)
            })?;

        debug!(?path, "unstaged file");
        Ok(())
    }
}
