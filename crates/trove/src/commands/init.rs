//! Initialize command.

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::info;
use trove_config::{
    GitIntegrationContext, GitOverrides, PROJECT_FILE_NAME, ProjectConfig, create_project,
};
use trove_core::{CommandResult, MessageTemplate, commit_after_command};
use trove_git::{InitOptions, Repository};

use super::{exit_code, with_message_override};

/// Default commit message for a new project.
pub const INIT_MESSAGE: &str = "Initialized a new project";

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name
    #[arg(long, default_value = "Example project")]
    pub name: String,

    /// Project description, also used as the git repository description
    #[arg(long)]
    pub description: Option<String>,
}

/// Runs the init command.
///
/// Git integration is on unless `--git no` is given. A repository is created
/// when the current directory is not one yet.
pub fn run(args: &InitArgs, overrides: &GitOverrides) -> Result<i32> {
    let root = std::env::current_dir().context("failed to read the current directory")?;
    let path = root.join(PROJECT_FILE_NAME);
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let context = GitIntegrationContext::new(
        overrides.git.unwrap_or(true),
        overrides.non_interactive,
    );
    let repo = Repository::new(&root);

    if context.enabled() && !repo.is_repository() {
        repo.init(&init_options(args, overrides))
            .context("failed to create the git repository")?;
    }

    let policy = commit_after_command(MessageTemplate::fixed(INIT_MESSAGE));
    let outcome = policy.run(&context, &repo, args, |args| {
        let mut project = ProjectConfig::new(args.name.clone());
        project.description = args.description.clone().unwrap_or_default();
        project.git = context.enabled();

        create_project(&path, &project)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Initialized an empty project in '{}'", root.display());

        Ok::<_, anyhow::Error>(with_message_override(CommandResult::new(0), overrides))
    })?;

    exit_code(outcome)
}

fn init_options(args: &InitArgs, overrides: &GitOverrides) -> InitOptions {
    InitOptions {
        user_name: overrides.user_name.clone(),
        user_email: overrides.user_email.clone(),
        description: args.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_options_carry_identity_and_description() {
        let args = InitArgs {
            name: "infra".to_string(),
            description: Some("Policy for the fleet".to_string()),
        };
        let overrides = GitOverrides {
            user_name: Some("Jane".to_string()),
            user_email: Some("jane@example.com".to_string()),
            ..GitOverrides::default()
        };

        let options = init_options(&args, &overrides);
        assert_eq!(
            options,
            InitOptions::default()
                .user("Jane", "jane@example.com")
                .description("Policy for the fleet")
        );
    }

    #[test]
    fn test_init_options_without_identity() {
        let args = InitArgs {
            name: "infra".to_string(),
            description: None,
        };
        let options = init_options(&args, &GitOverrides::default());
        assert_eq!(options, InitOptions::default());
    }
}
