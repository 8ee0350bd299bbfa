//! CLI definition.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use trove_config::GitOverrides;

use crate::commands;

/// A build tool that records every successful change as a git commit.
#[derive(Debug, Parser)]
#[command(name = "trove")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub git: GitArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Answer for `--git`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum YesNo {
    /// Commit changes to git
    Yes,
    /// Leave git alone
    No,
}

impl From<YesNo> for bool {
    fn from(answer: YesNo) -> Self {
        answer == YesNo::Yes
    }
}

/// Git integration flags shared by all commands.
#[derive(Debug, Args)]
pub struct GitArgs {
    /// Override the git option in trove.json
    #[arg(long, value_enum, global = true)]
    pub git: Option<YesNo>,

    /// Git user name for a new repository
    #[arg(long, global = true)]
    pub git_user_name: Option<String>,

    /// Git user email for a new repository
    #[arg(long, global = true)]
    pub git_user_email: Option<String>,

    /// Commit message to use instead of the default
    #[arg(long, global = true)]
    pub git_commit_message: Option<String>,

    /// Don't prompt, use defaults
    #[arg(long, global = true, env = "TROVE_NON_INTERACTIVE")]
    pub non_interactive: bool,
}

impl GitArgs {
    fn overrides(&self) -> GitOverrides {
        GitOverrides {
            git: self.git.map(bool::from),
            user_name: self.git_user_name.clone(),
            user_email: self.git_user_email.clone(),
            commit_message: self.git_commit_message.clone(),
            non_interactive: self.non_interactive,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create trove.json and start tracking it in git
    Init(commands::init::InitArgs),

    /// Add modules to the project
    Add(commands::add::AddArgs),

    /// Remove modules from the project
    Remove(commands::remove::RemoveArgs),

    /// Change the project description
    SetDescription(commands::set_description::SetDescriptionArgs),
}

impl Cli {
    /// Runs the CLI command and returns its exit code.
    pub fn run(self) -> Result<i32> {
        let overrides = self.git.overrides();
        match self.command {
            Commands::Init(args) => commands::init::run(&args, &overrides),
            Commands::Add(args) => commands::add::run(&args, &overrides),
            Commands::Remove(args) => commands::remove::run(&args, &overrides),
            Commands::SetDescription(args) => commands::set_description::run(&args, &overrides),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_git_flag_parses_yes_no() {
        let cli = Cli::parse_from(["trove", "--git", "no", "add", "foo"]);
        assert_eq!(cli.git.overrides().git, Some(false));

        let cli = Cli::parse_from(["trove", "add", "foo", "--git", "yes"]);
        assert_eq!(cli.git.overrides().git, Some(true));
    }

    #[test]
    fn test_overrides_default_to_none() {
        let cli = Cli::parse_from(["trove", "remove", "foo"]);
        assert_eq!(cli.git.overrides().git, None);
        assert!(cli.git.overrides().commit_message.is_none());
    }
}
