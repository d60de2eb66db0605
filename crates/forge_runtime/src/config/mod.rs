//! Configuration system
//!
//! Runtime settings are authored alongside the project and loaded at
//! startup, before extensions register themselves. Both TOML and RON files
//! are supported; the format is chosen by file extension.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Project-level runtime settings
///
/// Names the scene files the engine loads through the registries. The
/// settings file is produced by the editor next to the scene data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeSettings {
    /// Project name, used for the window title and diagnostics
    pub project_name: String,

    /// Name of the scene loaded first
    pub first_scene: String,

    /// Directories searched for scene files
    pub scene_paths: Vec<String>,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            project_name: "Untitled Project".to_string(),
            first_scene: String::new(),
            scene_paths: vec!["scenes".to_string()],
        }
    }
}

impl Config for RuntimeSettings {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip_through_toml() {
        let settings = RuntimeSettings {
            project_name: "Asteroid Salvage".to_string(),
            first_scene: "Menu".to_string(),
            scene_paths: vec!["scenes".to_string(), "dlc/scenes".to_string()],
        };

        let serialized = toml::to_string_pretty(&settings).expect("settings should serialize");
        let parsed: RuntimeSettings =
            toml::from_str(&serialized).expect("settings should parse back");

        assert_eq!(parsed.project_name, settings.project_name);
        assert_eq!(parsed.first_scene, settings.first_scene);
        assert_eq!(parsed.scene_paths, settings.scene_paths);
    }

    #[test]
    fn test_settings_parse_from_ron() {
        let source = r#"
            (
                project_name: "Asteroid Salvage",
                first_scene: "Menu",
                scene_paths: ["scenes"],
            )
        "#;

        let parsed: RuntimeSettings = ron::from_str(source).expect("settings should parse");
        assert_eq!(parsed.project_name, "Asteroid Salvage");
        assert_eq!(parsed.first_scene, "Menu");
    }

    #[test]
    fn test_unsupported_format_is_rejected_on_save() {
        let settings = RuntimeSettings::default();
        let result = settings.save_to_file("settings.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
