//! Backward-compatibility shims for retired registration APIs
//!
//! Old extension packages called a single global-callback registration
//! entry point instead of the per-event functions on
//! [`LifecycleCallbacks`](crate::callbacks::LifecycleCallbacks). The entry
//! point is kept here as a warn-and-no-op wrapper at the boundary so those
//! packages keep loading; it is not part of the core types.

use crate::extension::ExtensionContext;

/// Legacy global-callback registration entry point
///
/// Has no effect. Register scene lifecycle callbacks through
/// [`ExtensionContext::callbacks_mut`] instead.
#[deprecated(
    since = "0.1.0",
    note = "global callback registration is a no-op; use ExtensionContext::callbacks_mut"
)]
pub fn register_global_callbacks(_context: &mut ExtensionContext) {
    log::warn!(
        "register_global_callbacks is deprecated and has no effect; \
         register scene lifecycle callbacks individually instead"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(deprecated)]
    fn test_legacy_registration_is_a_no_op() {
        let mut context = ExtensionContext::new();
        register_global_callbacks(&mut context);

        // Nothing was registered anywhere
        let scene = crate::scene::SceneContext::new("Level1");
        context.callbacks().dispatch_scene_loaded(&scene);
        assert_eq!(context.objects().missing_lookups(), 0);
    }
}
