//! Extension context - the engine's extension-point protocol
//!
//! Following Game Engine Architecture Chapter 16.2 - Runtime Object Model
//! Architectures. Every object type, behavior type, and cross-cutting
//! feature (pooling, networking, physics) plugs into the engine through
//! this context: extensions register factories and lifecycle callbacks at
//! startup, and the engine resolves identifiers from project data when
//! instantiating entities at load time.
//!
//! The context is constructed once by the engine and passed (or injected)
//! into every subsystem that registers or resolves types; there is no
//! hidden global singleton. Registration happens during the initialization
//! phase, strictly before any scene update begins.

pub mod compat;

use std::sync::Arc;

use crate::behavior::{BehaviorData, BehaviorFactory, EmptyBehaviorFactory, RuntimeBehavior};
use crate::callbacks::LifecycleCallbacks;
use crate::object::{EmptyObjectFactory, ObjectData, ObjectFactory, RuntimeObject};
use crate::registry::{TypeRegistry, DEFAULT_TYPE};
use crate::scene::SceneContext;

/// Process-wide extension state: type registries and the callback bus
///
/// Owns the object registry, the behavior registry, and the lifecycle
/// callback lists. Construction registers the inert default factories
/// under the reserved empty identifier, so resolution is total before any
/// extension code runs.
pub struct ExtensionContext {
    /// Object factories by type identifier
    objects: TypeRegistry<dyn ObjectFactory>,

    /// Behavior factories by type identifier, independent namespace
    behaviors: TypeRegistry<dyn BehaviorFactory>,

    /// Scene lifecycle callback lists
    callbacks: LifecycleCallbacks,
}

impl ExtensionContext {
    /// Create a context with the default object and behavior types registered
    pub fn new() -> Self {
        let mut objects: TypeRegistry<dyn ObjectFactory> = TypeRegistry::new("object");
        let mut behaviors: TypeRegistry<dyn BehaviorFactory> = TypeRegistry::new("behavior");

        objects.register(DEFAULT_TYPE, Arc::new(EmptyObjectFactory));
        behaviors.register(DEFAULT_TYPE, Arc::new(EmptyBehaviorFactory));

        log::debug!("Extension context initialized with default object and behavior types");

        Self {
            objects,
            behaviors,
            callbacks: LifecycleCallbacks::new(),
        }
    }

    /// Register an object factory under a type identifier
    ///
    /// Called by extension modules at startup. Overwrites silently if the
    /// identifier is already registered; extensions rely on this to
    /// override base types, including the default type itself.
    pub fn register_object_type(
        &mut self,
        identifier: impl Into<String>,
        factory: Arc<dyn ObjectFactory>,
    ) {
        self.objects.register(identifier, factory);
    }

    /// Register a behavior factory under a type identifier
    ///
    /// Symmetric to [`Self::register_object_type`], separate namespace.
    pub fn register_behavior_type(
        &mut self,
        identifier: impl Into<String>,
        factory: Arc<dyn BehaviorFactory>,
    ) {
        self.behaviors.register(identifier, factory);
    }

    /// Resolve an object type identifier to its factory
    ///
    /// Never fails for a missing identifier: unknown types degrade to the
    /// default type after one warning diagnostic. See
    /// [`TypeRegistry::resolve`].
    pub fn resolve_object_constructor(&self, identifier: &str) -> Arc<dyn ObjectFactory> {
        self.objects.resolve(identifier)
    }

    /// Resolve a behavior type identifier to its factory
    pub fn resolve_behavior_constructor(&self, identifier: &str) -> Arc<dyn BehaviorFactory> {
        self.behaviors.resolve(identifier)
    }

    /// Instantiate an object from its serialized description
    ///
    /// Resolves the object's type identifier and constructs an instance.
    /// Unknown types produce an inert placeholder instance rather than an
    /// error, keeping the engine resilient to stale project data.
    pub fn instantiate_object(
        &self,
        scene: &SceneContext,
        data: &ObjectData,
    ) -> Box<dyn RuntimeObject> {
        self.resolve_object_constructor(&data.object_type)
            .create(scene, data)
    }

    /// Instantiate a behavior from its serialized description
    pub fn instantiate_behavior(
        &self,
        scene: &SceneContext,
        data: &BehaviorData,
    ) -> Box<dyn RuntimeBehavior> {
        self.resolve_behavior_constructor(&data.behavior_type)
            .create(scene, data)
    }

    /// Lifecycle callback bus, for dispatch by the scene manager
    pub fn callbacks(&self) -> &LifecycleCallbacks {
        &self.callbacks
    }

    /// Mutable lifecycle callback bus, for registration at startup
    pub fn callbacks_mut(&mut self) -> &mut LifecycleCallbacks {
        &mut self.callbacks
    }

    /// Object registry, for diagnostics and startup reporting
    pub fn objects(&self) -> &TypeRegistry<dyn ObjectFactory> {
        &self.objects
    }

    /// Behavior registry, for diagnostics and startup reporting
    pub fn behaviors(&self) -> &TypeRegistry<dyn BehaviorFactory> {
        &self.behaviors
    }
}

impl Default for ExtensionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::EmptyObject;

    struct StubObjectFactory;

    impl ObjectFactory for StubObjectFactory {
        fn create(&self, _scene: &SceneContext, data: &ObjectData) -> Box<dyn RuntimeObject> {
            Box::new(EmptyObject::new(data.name.clone()))
        }
    }

    #[test]
    fn test_register_and_resolve_object_type() {
        let mut context = ExtensionContext::new();
        let factory: Arc<dyn ObjectFactory> = Arc::new(StubObjectFactory);

        context.register_object_type("TextObject::Text", Arc::clone(&factory));

        let resolved = context.resolve_object_constructor("TextObject::Text");
        assert!(Arc::ptr_eq(&resolved, &factory));
    }

    #[test]
    fn test_unknown_type_falls_back_with_one_diagnostic() {
        let mut context = ExtensionContext::new();
        let text_factory: Arc<dyn ObjectFactory> = Arc::new(StubObjectFactory);
        let default_factory: Arc<dyn ObjectFactory> = Arc::new(StubObjectFactory);

        context.register_object_type("TextObject::Text", Arc::clone(&text_factory));
        context.register_object_type(DEFAULT_TYPE, Arc::clone(&default_factory));

        let resolved = context.resolve_object_constructor("TextObject::Text");
        assert!(Arc::ptr_eq(&resolved, &text_factory));
        assert_eq!(context.objects().missing_lookups(), 0);

        let fallback = context.resolve_object_constructor("Sprite::Unknown");
        assert!(Arc::ptr_eq(&fallback, &default_factory));
        assert_eq!(context.objects().missing_lookups(), 1);
    }

    #[test]
    fn test_object_and_behavior_namespaces_are_independent() {
        let mut context = ExtensionContext::new();
        context.register_object_type("Foo", Arc::new(StubObjectFactory));

        assert!(context.objects().contains("Foo"));
        assert!(!context.behaviors().contains("Foo"));

        // Resolving "Foo" as a behavior must fall back, not find the object
        let _fallback = context.resolve_behavior_constructor("Foo");
        assert_eq!(context.behaviors().missing_lookups(), 1);
        assert_eq!(context.objects().missing_lookups(), 0);
    }

    #[test]
    fn test_default_types_are_registered_at_construction() {
        let context = ExtensionContext::new();
        assert!(context.objects().contains(DEFAULT_TYPE));
        assert!(context.behaviors().contains(DEFAULT_TYPE));
    }

    #[test]
    fn test_instantiate_object_with_unknown_type_is_inert() {
        let context = ExtensionContext::new();
        let scene = SceneContext::new("Level1");
        let data = ObjectData::new("Relic", "RetiredExtension::Relic");

        let object = context.instantiate_object(&scene, &data);
        assert_eq!(object.name(), "Relic");
        assert_eq!(object.object_type(), DEFAULT_TYPE);
        assert_eq!(context.objects().missing_lookups(), 1);
    }

    #[test]
    fn test_instantiate_behavior_with_unknown_type_is_inert() {
        let context = ExtensionContext::new();
        let scene = SceneContext::new("Level1");
        let data = BehaviorData::new("Drag", "RetiredBehavior::Draggable");

        let behavior = context.instantiate_behavior(&scene, &data);
        assert_eq!(behavior.name(), "Drag");
        assert_eq!(behavior.behavior_type(), DEFAULT_TYPE);
    }

    #[test]
    fn test_closure_factories_register_through_context() {
        let mut context = ExtensionContext::new();
        context.register_object_type(
            "Sprite",
            Arc::new(|_scene: &SceneContext, data: &ObjectData| -> Box<dyn RuntimeObject> {
                Box::new(EmptyObject::new(format!("sprite:{}", data.name)))
            }),
        );

        let scene = SceneContext::new("Level1");
        let object = context.instantiate_object(&scene, &ObjectData::new("Hero", "Sprite"));
        assert_eq!(object.name(), "sprite:Hero");
    }

    #[test]
    fn test_callbacks_are_reachable_through_context() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let log = Rc::new(RefCell::new(Vec::new()));
        let mut context = ExtensionContext::new();

        let log_clone = Rc::clone(&log);
        context
            .callbacks_mut()
            .on_scene_loaded(move |scene| log_clone.borrow_mut().push(scene.name().to_string()));

        context
            .callbacks()
            .dispatch_scene_loaded(&SceneContext::new("Level1"));
        assert_eq!(*log.borrow(), vec!["Level1".to_string()]);
    }
}
