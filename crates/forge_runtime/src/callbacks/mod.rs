//! Scene lifecycle callback bus
//!
//! Following Game Engine Architecture Chapter 16.8 - event distribution to
//! decoupled listeners. Extension modules subscribe to global scene
//! lifecycle transitions without the engine core importing them: one
//! ordered list per event kind, append-only registration, synchronous
//! in-order dispatch by the scene-management collaborator.
//!
//! There is no fault isolation between callbacks: a callback that panics
//! unwinds through dispatch and aborts the remaining callbacks of that
//! event. Callbacks return `()` and cannot fail by construction.

use crate::object::RuntimeObject;
use crate::scene::SceneContext;

/// Callback invoked with the affected scene
pub type SceneCallback = Box<dyn Fn(&SceneContext)>;

/// Callback invoked with the affected scene and the removed object
pub type ObjectRemovedCallback = Box<dyn Fn(&SceneContext, &dyn RuntimeObject)>;

/// Ordered callback lists for the five scene lifecycle events
///
/// Callbacks fire in registration order. Registering the same callback
/// twice makes it fire twice; individual removal is not supported, only the
/// full reset used by test harnesses between independent runs.
#[derive(Default)]
pub struct LifecycleCallbacks {
    scene_loaded: Vec<SceneCallback>,
    scene_unloaded: Vec<SceneCallback>,
    scene_paused: Vec<SceneCallback>,
    scene_resumed: Vec<SceneCallback>,
    object_removed: Vec<ObjectRemovedCallback>,
}

impl LifecycleCallbacks {
    /// Create an empty callback bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback fired after a scene finishes loading
    pub fn on_scene_loaded(&mut self, callback: impl Fn(&SceneContext) + 'static) {
        self.scene_loaded.push(Box::new(callback));
    }

    /// Register a callback fired right before a scene is torn down
    pub fn on_scene_unloaded(&mut self, callback: impl Fn(&SceneContext) + 'static) {
        self.scene_unloaded.push(Box::new(callback));
    }

    /// Register a callback fired when a scene is paused
    pub fn on_scene_paused(&mut self, callback: impl Fn(&SceneContext) + 'static) {
        self.scene_paused.push(Box::new(callback));
    }

    /// Register a callback fired when a scene is resumed
    pub fn on_scene_resumed(&mut self, callback: impl Fn(&SceneContext) + 'static) {
        self.scene_resumed.push(Box::new(callback));
    }

    /// Register a callback fired when an object is removed from its scene
    pub fn on_object_removed(
        &mut self,
        callback: impl Fn(&SceneContext, &dyn RuntimeObject) + 'static,
    ) {
        self.object_removed.push(Box::new(callback));
    }

    /// Dispatch the scene-loaded event
    ///
    /// Called by the scene-management collaborator after a scene finishes
    /// loading. Invokes every registered callback in registration order.
    pub fn dispatch_scene_loaded(&self, scene: &SceneContext) {
        for callback in &self.scene_loaded {
            callback(scene);
        }
    }

    /// Dispatch the scene-unloaded event
    ///
    /// Called right before a scene is torn down.
    pub fn dispatch_scene_unloaded(&self, scene: &SceneContext) {
        for callback in &self.scene_unloaded {
            callback(scene);
        }
    }

    /// Dispatch the scene-paused event
    pub fn dispatch_scene_paused(&self, scene: &SceneContext) {
        for callback in &self.scene_paused {
            callback(scene);
        }
    }

    /// Dispatch the scene-resumed event
    pub fn dispatch_scene_resumed(&self, scene: &SceneContext) {
        for callback in &self.scene_resumed {
            callback(scene);
        }
    }

    /// Dispatch the object-removed event
    ///
    /// Called when an object instance is removed from a scene.
    pub fn dispatch_object_removed(&self, scene: &SceneContext, object: &dyn RuntimeObject) {
        for callback in &self.object_removed {
            callback(scene, object);
        }
    }

    /// Empty all five callback lists
    ///
    /// Reserved for test harnesses between independent runs. Must never be
    /// invoked during normal engine operation: it silently detaches every
    /// extension's lifecycle hooks.
    pub fn reset_all(&mut self) {
        let total = self.scene_loaded.len()
            + self.scene_unloaded.len()
            + self.scene_paused.len()
            + self.scene_resumed.len()
            + self.object_removed.len();
        log::debug!("Resetting lifecycle callbacks ({} detached)", total);

        self.scene_loaded.clear();
        self.scene_unloaded.clear();
        self.scene_paused.clear();
        self.scene_resumed.clear();
        self.object_removed.clear();
    }
}
