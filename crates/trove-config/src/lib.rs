//! Project state and git integration settings for Trove.
//!
//! This crate handles the `trove.json` project file and resolves, from it and
//! the command line, whether commands should be committed to git.

mod context;
mod error;
mod loader;
mod schema;

pub use context::{GitIntegrationContext, GitOverrides};
pub use error::{ConfigError, ConfigResult};
pub use loader::{
    PROJECT_FILE_NAME, create_project, find_project_file, find_project_file_from, load_project,
    save_project,
};
pub use schema::ProjectConfig;
