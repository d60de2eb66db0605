//! # Forge Runtime
//!
//! Runtime extensibility core for a modular game engine.
//!
//! ## Features
//!
//! - **Type Registry**: string-keyed object and behavior constructors with
//!   total, fallback-to-default resolution
//! - **Lifecycle Callbacks**: ordered scene lifecycle subscriptions for
//!   decoupled extension modules
//! - **Data Driven**: entities instantiated by identifier from serialized
//!   scene data
//! - **Explicit State**: one extension context owned by the engine, no
//!   hidden global singletons
//!
//! ## Quick Start
//!
//! ```rust
//! use forge_runtime::prelude::*;
//! use std::sync::Arc;
//!
//! let mut context = ExtensionContext::new();
//!
//! // An extension registers its object type at startup...
//! context.register_object_type(
//!     "TextObject::Text",
//!     Arc::new(|_scene: &SceneContext, data: &ObjectData| -> Box<dyn RuntimeObject> {
//!         Box::new(EmptyObject::new(data.name.clone()))
//!     }),
//! );
//!
//! // ...and subscribes to scene lifecycle events.
//! context.callbacks_mut().on_scene_loaded(|scene| {
//!     log::info!("scene {} loaded", scene.name());
//! });
//!
//! // The engine instantiates entities by identifier at load time.
//! let scene = SceneContext::new("Level1");
//! let object = context.instantiate_object(&scene, &ObjectData::new("Title", "TextObject::Text"));
//! assert_eq!(object.name(), "Title");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;

pub mod behavior;
pub mod callbacks;
pub mod config;
pub mod object;
pub mod registry;
pub mod scene;

mod extension;

pub use extension::{compat, ExtensionContext};

/// Common imports for engine and extension crates
pub mod prelude {
    pub use crate::{
        behavior::{BehaviorData, BehaviorFactory, EmptyBehavior, RuntimeBehavior},
        callbacks::LifecycleCallbacks,
        config::{Config, ConfigError, RuntimeSettings},
        object::{EmptyObject, ObjectData, ObjectFactory, RuntimeObject},
        registry::{TypeRegistry, DEFAULT_TYPE},
        scene::{SceneContext, SceneData},
        ExtensionContext,
    };
}
