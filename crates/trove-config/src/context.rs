//! Per-process git integration settings.

use crate::ProjectConfig;

/// Git-related command line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOverrides {
    /// Forces git integration on or off, regardless of the project file.
    pub git: Option<bool>,
    /// Commit identity name for new repositories.
    pub user_name: Option<String>,
    /// Commit identity email for new repositories.
    pub user_email: Option<String>,
    /// Replaces the commit message of mutating commands.
    pub commit_message: Option<String>,
    /// Never prompt; use defaults.
    pub non_interactive: bool,
}

/// Whether commands commit, and whether they may ask questions.
///
/// Resolved once per process and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitIntegrationContext {
    enabled: bool,
    non_interactive: bool,
}

impl GitIntegrationContext {
    /// Creates a context.
    pub const fn new(enabled: bool, non_interactive: bool) -> Self {
        Self {
            enabled,
            non_interactive,
        }
    }

    /// A context with git integration turned off.
    pub const fn disabled() -> Self {
        Self::new(false, true)
    }

    /// Combines the project file setting with command line overrides.
    ///
    /// Without a project file git integration is off unless forced on.
    pub fn resolve(project: Option<&ProjectConfig>, overrides: &GitOverrides) -> Self {
        let from_project = project.is_some_and(|p| p.git);
        Self::new(
            overrides.git.unwrap_or(from_project),
            overrides.non_interactive,
        )
    }

    /// Returns whether successful commands are committed.
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns whether prompting is suppressed.
    pub const fn non_interactive(&self) -> bool {
        self.non_interactive
    }
}
