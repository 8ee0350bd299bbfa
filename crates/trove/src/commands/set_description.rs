//! Set-description command.

use anyhow::Result;
use clap::Args;
use trove_config::{GitOverrides, ProjectConfig};
use trove_core::{CommandResult, MessageTemplate, commit_after_command};

use super::Session;

/// Arguments for the set-description command.
#[derive(Debug, Args)]
pub struct SetDescriptionArgs {
    /// New description
    pub description: String,
}

/// Runs the set-description command.
pub fn run(args: &SetDescriptionArgs, overrides: &GitOverrides) -> Result<i32> {
    let session = Session::open(overrides)?;
    let policy = commit_after_command(MessageTemplate::fixed("Updated project description"));
    session.run_committed(&policy, args, overrides, set_description)
}

#[allow(clippy::unnecessary_wraps)] // Signature required by Session::run_committed
fn set_description(project: &mut ProjectConfig, args: &SetDescriptionArgs) -> Result<CommandResult> {
    if project.description == args.description {
        return Ok(CommandResult::unchanged());
    }
    project.description.clone_from(&args.description);
    Ok(CommandResult::new(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trove_core::CommandReturn;

    #[test]
    fn test_set_description() {
        let mut project = ProjectConfig::default();
        let args = SetDescriptionArgs {
            description: "Fleet policy".to_string(),
        };

        let result = set_description(&mut project, &args).unwrap();

        assert_eq!(project.description, "Fleet policy");
        assert!(result.should_commit());
    }

    #[test]
    fn test_same_description_is_unchanged() {
        let mut project = ProjectConfig {
            description: "Fleet policy".to_string(),
            ..ProjectConfig::default()
        };
        let args = SetDescriptionArgs {
            description: "Fleet policy".to_string(),
        };

        let result = set_description(&mut project, &args).unwrap();

        assert!(!result.should_commit());
    }
}
