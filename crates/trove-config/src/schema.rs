//! Project file schema.

use serde::{Deserialize, Serialize};

/// Contents of `trove.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Free-form project description.
    #[serde(default)]
    pub description: String,

    /// Whether successful commands are committed to git.
    #[serde(default)]
    pub git: bool,

    /// Modules added to the project, in insertion order.
    #[serde(default)]
    pub modules: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: String::new(),
            git: false,
            modules: Vec::new(),
        }
    }
}

fn default_name() -> String {
    "Example project".to_string()
}

impl ProjectConfig {
    /// Creates a project with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns whether `module` has been added.
    pub fn has_module(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: ProjectConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert_eq!(config.name, "Example project");
        assert!(!config.git);
    }

    #[test]
    fn test_parse_full() {
        let config: ProjectConfig = serde_json::from_str(
            r#"{
                "name": "infra",
                "description": "Policy set",
                "git": true,
                "modules": ["masterfiles", "autorun"]
            }"#,
        )
        .unwrap();

        assert_eq!(config.name, "infra");
        assert_eq!(config.description, "Policy set");
        assert!(config.git);
        assert!(config.has_module("autorun"));
        assert!(!config.has_module("other"));
    }

    #[test]
    fn test_new_sets_name() {
        let config = ProjectConfig::new("infra");
        assert_eq!(config.name, "infra");
        assert!(config.modules.is_empty());
    }
}
