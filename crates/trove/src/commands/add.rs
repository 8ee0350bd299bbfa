//! Add command.

use anyhow::Result;
use clap::Args;
use tracing::info;
use trove_config::{GitOverrides, ProjectConfig};
use trove_core::{
    CommandResult, CommitPolicy, MessageTemplate, commit_after_command, extractor,
    format_positional,
};

use super::{Session, plural_suffix};

const ADD_MESSAGE: &str = "Added module%s %s";

/// Arguments for the add command.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Modules to add
    #[arg(required = true)]
    pub modules: Vec<String>,
}

/// Runs the add command.
pub fn run(args: &AddArgs, overrides: &GitOverrides) -> Result<i32> {
    let session = Session::open(overrides)?;
    session.run_committed(&policy()?, args, overrides, add_modules)
}

fn policy() -> Result<CommitPolicy<AddArgs>> {
    let message = MessageTemplate::with_extractors(
        ADD_MESSAGE,
        vec![
            extractor(|args: &AddArgs| plural_suffix(args.modules.len())),
            extractor(|args: &AddArgs| args.modules.join(", ")),
        ],
    )?;
    Ok(commit_after_command(message))
}

fn add_modules(project: &mut ProjectConfig, args: &AddArgs) -> Result<CommandResult> {
    let mut added: Vec<&str> = Vec::new();
    for module in &args.modules {
        if project.has_module(module) || added.contains(&module.as_str()) {
            info!("Module '{module}' is already added");
            continue;
        }
        added.push(module);
    }

    if added.is_empty() {
        println!("Nothing to add");
        return Ok(CommandResult::unchanged());
    }

    project.modules.extend(added.iter().map(ToString::to_string));
    println!("Added {}", added.join(", "));

    let result = CommandResult::new(0);
    if added.len() == args.modules.len() {
        return Ok(result);
    }

    // Only some were new; name just those.
    let message = format_positional(
        ADD_MESSAGE,
        &[plural_suffix(added.len()), added.join(", ")],
    )?;
    Ok(result.with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trove_core::CommandReturn;

    fn args(modules: &[&str]) -> AddArgs {
        AddArgs {
            modules: modules.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_policy_message() {
        let policy = policy().unwrap();
        assert_eq!(
            policy.message().resolve(&args(&["masterfiles"])),
            "Added module masterfiles"
        );
        assert_eq!(
            policy.message().resolve(&args(&["a", "b"])),
            "Added modules a, b"
        );
    }

    #[test]
    fn test_add_new_modules() {
        let mut project = ProjectConfig::default();

        let result = add_modules(&mut project, &args(&["a", "b"])).unwrap();

        assert_eq!(project.modules, vec!["a", "b"]);
        assert_eq!(result, CommandResult::new(0));
    }

    #[test]
    fn test_add_existing_only() {
        let mut project = ProjectConfig::default();
        project.modules.push("a".to_string());

        let result = add_modules(&mut project, &args(&["a"])).unwrap();

        assert!(!result.should_commit());
        assert_eq!(result.code(), 0);
        assert_eq!(project.modules, vec!["a"]);
    }

    #[test]
    fn test_add_partially_names_new_modules() {
        let mut project = ProjectConfig::default();
        project.modules.push("a".to_string());

        let result = add_modules(&mut project, &args(&["a", "b"])).unwrap();

        assert_eq!(project.modules, vec!["a", "b"]);
        assert_eq!(result.commit_message(), Some("Added module b"));
    }

    #[test]
    fn test_add_ignores_duplicate_arguments() {
        let mut project = ProjectConfig::default();

        let result = add_modules(&mut project, &args(&["a", "a"])).unwrap();

        assert_eq!(project.modules, vec!["a"]);
        assert_eq!(result.commit_message(), Some("Added module a"));
    }
}
