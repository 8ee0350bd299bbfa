//! Remove command.

use anyhow::Result;
use clap::Args;
use tracing::warn;
use trove_config::{GitOverrides, ProjectConfig};
use trove_core::{
    CommandResult, CommitPolicy, MessageTemplate, commit_after_command, extractor,
    format_positional,
};

use super::{Session, plural_suffix};

const REMOVE_MESSAGE: &str = "Removed module%s %s";

/// Arguments for the remove command.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Modules to remove
    #[arg(required = true)]
    pub modules: Vec<String>,
}

/// Runs the remove command.
///
/// Exits with code 1 when none of the modules are in the project.
pub fn run(args: &RemoveArgs, overrides: &GitOverrides) -> Result<i32> {
    let session = Session::open(overrides)?;
    session.run_committed(&policy()?, args, overrides, remove_modules)
}

fn policy() -> Result<CommitPolicy<RemoveArgs>> {
    let message = MessageTemplate::with_extractors(
        REMOVE_MESSAGE,
        vec![
            extractor(|args: &RemoveArgs| plural_suffix(args.modules.len())),
            extractor(|args: &RemoveArgs| args.modules.join(", ")),
        ],
    )?;
    Ok(commit_after_command(message))
}

fn remove_modules(project: &mut ProjectConfig, args: &RemoveArgs) -> Result<CommandResult> {
    let (removed, missing): (Vec<&String>, Vec<&String>) = args
        .modules
        .iter()
        .partition(|module| project.has_module(module));

    for module in &missing {
        warn!("Module '{module}' not found");
    }
    if removed.is_empty() {
        return Ok(CommandResult::new(1));
    }

    project.modules.retain(|module| !removed.contains(&module));
    let names = removed
        .iter()
        .map(|module| module.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Removed {names}");

    let result = CommandResult::new(0);
    if missing.is_empty() {
        return Ok(result);
    }

    let message = format_positional(REMOVE_MESSAGE, &[plural_suffix(removed.len()), names])?;
    Ok(result.with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trove_core::CommandReturn;

    fn project(modules: &[&str]) -> ProjectConfig {
        ProjectConfig {
            modules: modules.iter().map(ToString::to_string).collect(),
            ..ProjectConfig::default()
        }
    }

    fn args(modules: &[&str]) -> RemoveArgs {
        RemoveArgs {
            modules: modules.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_policy_message() {
        let policy = policy().unwrap();
        assert_eq!(
            policy.message().resolve(&args(&["a", "b"])),
            "Removed modules a, b"
        );
    }

    #[test]
    fn test_remove_modules() {
        let mut project = project(&["a", "b", "c"]);

        let result = remove_modules(&mut project, &args(&["a", "c"])).unwrap();

        assert_eq!(project.modules, vec!["b"]);
        assert_eq!(result, CommandResult::new(0));
    }

    #[test]
    fn test_remove_missing_module_fails() {
        let mut project = project(&["a"]);

        let result = remove_modules(&mut project, &args(&["z"])).unwrap();

        assert_eq!(result.code(), 1);
        assert_eq!(project.modules, vec!["a"]);
    }

    #[test]
    fn test_remove_partially_names_removed_modules() {
        let mut project = project(&["a", "b"]);

        let result = remove_modules(&mut project, &args(&["b", "z"])).unwrap();

        assert_eq!(project.modules, vec!["a"]);
        assert_eq!(result.commit_message(), Some("Removed module b"));
    }
}
