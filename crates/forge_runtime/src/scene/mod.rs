//! Scene-facing types consumed by the extensibility core
//!
//! The scene graph and update loop live outside this core. What lives here
//! is the contextual handle handed to factories and lifecycle callbacks,
//! and the serialized scene description whose type identifiers feed the
//! registries at load time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::object::ObjectData;

/// Handle to the scene affected by a lifecycle event or instantiation
///
/// Passed by the scene-management collaborator into factory construction
/// and lifecycle dispatch. Kept deliberately small; the full scene state is
/// owned elsewhere.
#[derive(Debug, Clone)]
pub struct SceneContext {
    name: String,
}

impl SceneContext {
    /// Create a context for the named scene
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Scene name as authored in the editor
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Serialized description of one scene
///
/// Scene files are authored by the external editor and stored as RON. Only
/// the parts the extensibility core consumes are modeled here: the scene
/// name and the object instances to construct through the registries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneData {
    /// Scene name
    pub name: String,
    /// Object instances to construct at load time
    #[serde(default)]
    pub objects: Vec<ObjectData>,
}

impl SceneData {
    /// Parse scene data from a RON string
    pub fn from_ron_str(source: &str) -> Result<Self, SceneDataError> {
        ron::from_str(source).map_err(|e| SceneDataError::Parse(e.to_string()))
    }

    /// Load scene data from a RON file
    pub fn load_from_file(path: &str) -> Result<Self, SceneDataError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }
}

/// Scene data loading errors
#[derive(Error, Debug)]
pub enum SceneDataError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scene_data_from_ron() {
        let source = r#"
            (
                name: "Level1",
                objects: [
                    (name: "Title", object_type: "TextObject::Text"),
                    (
                        name: "Hero",
                        object_type: "Sprite",
                        behaviors: [
                            (name: "Drag", behavior_type: "DraggableBehavior::Draggable"),
                        ],
                    ),
                ],
            )
        "#;

        let scene = SceneData::from_ron_str(source).expect("scene data should parse");
        assert_eq!(scene.name, "Level1");
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.objects[0].object_type, "TextObject::Text");
        assert!(scene.objects[0].behaviors.is_empty());
        assert_eq!(scene.objects[1].behaviors.len(), 1);
        assert_eq!(
            scene.objects[1].behaviors[0].behavior_type,
            "DraggableBehavior::Draggable"
        );
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = SceneData::from_ron_str("(name: ");
        assert!(matches!(result, Err(SceneDataError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SceneData::load_from_file("does/not/exist.ron");
        assert!(matches!(result, Err(SceneDataError::Io(_))));
    }
}
