//! Commit policy for Trove commands.
//!
//! This crate decides when the effects of a command become a git commit:
//! - Commit message templates filled from command arguments
//! - The commit-or-roll-back policy wrapped around mutating commands
//! - The preconfigured policy for top-level commands

mod directive;
mod error;
mod message;
mod policy;

pub use directive::{CommandResult, CommandReturn};
pub use error::{CoreError, CoreResult};
pub use message::{
    Extractor, MessageTemplate, extractor, format_positional, placeholder_count,
};
pub use policy::{
    CommitOutcome, CommitPolicy, CommitPolicyBuilder, SkipReason, commit_after_command,
};
