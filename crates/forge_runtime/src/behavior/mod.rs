//! Behavior capability traits and serialized behavior data
//!
//! A "behavior" augments one object with reusable logic (dragging,
//! pathfinding, physics). Behaviors register in their own namespace, so an
//! identifier may name both an object type and a behavior type without
//! collision.

use serde::{Deserialize, Serialize};

use crate::registry::DEFAULT_TYPE;
use crate::scene::SceneContext;

/// Minimal surface of a constructed behavior instance
pub trait RuntimeBehavior {
    /// Behavior name, unique on its owner by editor convention
    fn name(&self) -> &str;

    /// Type identifier this instance was constructed from
    fn behavior_type(&self) -> &str;
}

/// Factory capability producing behavior instances
///
/// Same contract as the object factory: stateless, registered once at
/// startup, shared behind an owning handle.
pub trait BehaviorFactory: Send + Sync {
    /// Construct a behavior instance from scene context and serialized data
    fn create(&self, scene: &SceneContext, data: &BehaviorData) -> Box<dyn RuntimeBehavior>;
}

impl<F> BehaviorFactory for F
where
    F: Fn(&SceneContext, &BehaviorData) -> Box<dyn RuntimeBehavior> + Send + Sync,
{
    fn create(&self, scene: &SceneContext, data: &BehaviorData) -> Box<dyn RuntimeBehavior> {
        self(scene, data)
    }
}

/// Inert placeholder behavior used for unresolvable types
pub struct EmptyBehavior {
    name: String,
}

impl EmptyBehavior {
    /// Create a placeholder instance with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl RuntimeBehavior for EmptyBehavior {
    fn name(&self) -> &str {
        &self.name
    }

    fn behavior_type(&self) -> &str {
        DEFAULT_TYPE
    }
}

/// Factory for [`EmptyBehavior`], registered under the default identifier
pub struct EmptyBehaviorFactory;

impl BehaviorFactory for EmptyBehaviorFactory {
    fn create(&self, _scene: &SceneContext, data: &BehaviorData) -> Box<dyn RuntimeBehavior> {
        Box::new(EmptyBehavior::new(data.name.clone()))
    }
}

/// Serialized description of one behavior attached to an object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorData {
    /// Behavior name on its owner
    pub name: String,
    /// Type identifier, namespaced as `"Extension::Type"`
    pub behavior_type: String,
}

impl BehaviorData {
    /// Create behavior data
    pub fn new(name: impl Into<String>, behavior_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            behavior_type: behavior_type.into(),
        }
    }
}
