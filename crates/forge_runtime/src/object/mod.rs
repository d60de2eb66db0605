//! Object capability traits and serialized object data
//!
//! An "object" is anything placed in a scene: sprites, text, tilemaps.
//! Concrete object implementations live in extension crates; the engine
//! core only knows the factory capability used to construct them and the
//! minimal instance surface it needs to track them.

use serde::{Deserialize, Serialize};

use crate::behavior::BehaviorData;
use crate::registry::DEFAULT_TYPE;
use crate::scene::SceneContext;

/// Minimal surface of a constructed scene object
///
/// The concrete base implementation lives outside this core; the registry
/// only needs enough to identify instances in diagnostics and lifecycle
/// callbacks.
pub trait RuntimeObject {
    /// Instance name, unique within its scene by editor convention
    fn name(&self) -> &str;

    /// Type identifier this instance was constructed from
    fn object_type(&self) -> &str;
}

/// Factory capability producing object instances
///
/// Implemented by each extension and stored behind an owning handle in the
/// object registry. Factories are stateless constructors; requiring
/// `Send + Sync` lets a host treat populated registries as immutable
/// snapshots if it parallelizes scene updates.
pub trait ObjectFactory: Send + Sync {
    /// Construct an object instance from scene context and serialized data
    fn create(&self, scene: &SceneContext, data: &ObjectData) -> Box<dyn RuntimeObject>;
}

impl<F> ObjectFactory for F
where
    F: Fn(&SceneContext, &ObjectData) -> Box<dyn RuntimeObject> + Send + Sync,
{
    fn create(&self, scene: &SceneContext, data: &ObjectData) -> Box<dyn RuntimeObject> {
        self(scene, data)
    }
}

/// Inert placeholder object used for unresolvable types
///
/// Constructed when project data references a type from an extension that
/// is not currently loaded. It participates in the scene by name but does
/// nothing.
pub struct EmptyObject {
    name: String,
}

impl EmptyObject {
    /// Create a placeholder instance with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl RuntimeObject for EmptyObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn object_type(&self) -> &str {
        DEFAULT_TYPE
    }
}

/// Factory for [`EmptyObject`], registered under the default identifier
pub struct EmptyObjectFactory;

impl ObjectFactory for EmptyObjectFactory {
    fn create(&self, _scene: &SceneContext, data: &ObjectData) -> Box<dyn RuntimeObject> {
        Box::new(EmptyObject::new(data.name.clone()))
    }
}

/// Serialized description of one object instance
///
/// Produced by the external editor as part of scene data. The
/// `object_type` field is the identifier resolved through the object
/// registry at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectData {
    /// Instance name
    pub name: String,
    /// Type identifier, namespaced as `"Extension::Type"`
    pub object_type: String,
    /// Behaviors attached to this object
    #[serde(default)]
    pub behaviors: Vec<BehaviorData>,
}

impl ObjectData {
    /// Create object data with no attached behaviors
    pub fn new(name: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            object_type: object_type.into(),
            behaviors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_inert_placeholder() {
        let scene = SceneContext::new("Level1");
        let data = ObjectData::new("Hero", "Sprite::Unknown");

        let object = EmptyObjectFactory.create(&scene, &data);
        assert_eq!(object.name(), "Hero");
        assert_eq!(object.object_type(), DEFAULT_TYPE);
    }

    #[test]
    fn test_closure_factories_are_object_factories() {
        let scene = SceneContext::new("Level1");
        let data = ObjectData::new("Title", "TextObject::Text");

        let factory = |_scene: &SceneContext, data: &ObjectData| -> Box<dyn RuntimeObject> {
            Box::new(EmptyObject::new(data.name.clone()))
        };
        let object = factory.create(&scene, &data);
        assert_eq!(object.name(), "Title");
    }
}
