//! Project file loading and saving.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ConfigError, ConfigResult, ProjectConfig};

/// Project file name. Also the file that every mutating command commits.
pub const PROJECT_FILE_NAME: &str = "trove.json";

/// Loads the project file at the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_project(path: impl AsRef<Path>) -> ConfigResult<ProjectConfig> {
    let path = path.as_ref();
    debug!(?path, "loading project file");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;

    Ok(config)
}

/// Writes the project file, pretty printed with a trailing newline.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_project(path: impl AsRef<Path>, config: &ProjectConfig) -> ConfigResult<()> {
    let path = path.as_ref();
    debug!(?path, "saving project file");

    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, format!("{content}\n"))?;
    Ok(())
}

/// Writes a new project file, refusing to replace an existing one.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyExists`] if the file exists, or an error if
/// it cannot be written.
pub fn create_project(path: impl AsRef<Path>, config: &ProjectConfig) -> ConfigResult<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    save_project(path, config)
}

/// Finds the project file from the current directory or its parents.
///
/// # Errors
///
/// Returns an error if no project file is found.
pub fn find_project_file() -> ConfigResult<PathBuf> {
    let current_dir = std::env::current_dir()?;
    find_project_file_from(&current_dir)
}

/// Finds the project file starting from the given directory.
///
/// Walks up the directory tree until a project file is found.
///
/// # Errors
///
/// Returns an error if no project file is found.
pub fn find_project_file_from(start_dir: impl AsRef<Path>) -> ConfigResult<PathBuf> {
    let start_dir = start_dir.as_ref();
    let mut dir = start_dir;

    loop {
        let project_path = dir.join(PROJECT_FILE_NAME);
        if project_path.exists() {
            return Ok(project_path);
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    Err(ConfigError::NotFound(start_dir.join(PROJECT_FILE_NAME)))
}
