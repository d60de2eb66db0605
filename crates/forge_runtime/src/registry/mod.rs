//! String-keyed type registry for runtime extensibility
//!
//! Following Game Engine Architecture Chapter 16.2 - Runtime Object Model
//! Architectures. Object and behavior types are identified by strings that
//! come from serialized project data, so the mapping from "what to create"
//! to "how to create it" must stay open for extension modules that the
//! engine core never imports.
//!
//! Key properties:
//! - Registration is fire-and-forget: no validation, silent overwrite
//! - Resolution is total: unknown identifiers degrade to the default type
//! - Populated once at startup, read many times during scene loading

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Reserved identifier for the default/unknown type
///
/// The engine registers the inert placeholder factories under this
/// identifier before any extension runs; resolution falls back to it when
/// project data references a type that is not currently loaded.
pub const DEFAULT_TYPE: &str = "";

/// Registry mapping type identifiers to factory handles
///
/// One instance exists per factory namespace (objects, behaviors), so the
/// same identifier may appear in both without collision. `F` is the factory
/// capability trait stored behind an owning [`Arc`] handle.
///
/// Registration happens during the initialization phase, strictly before
/// any scene update; after that the registry is only read. No interior
/// synchronization is needed beyond the advisory diagnostics counter.
pub struct TypeRegistry<F: ?Sized> {
    /// Registered factories by type identifier
    entries: HashMap<String, Arc<F>>,
    /// Namespace label used in diagnostics ("object", "behavior")
    namespace: &'static str,
    /// Number of lookups that missed and fell back to the default type
    missing_lookups: AtomicU64,
}

impl<F: ?Sized> TypeRegistry<F> {
    /// Create an empty registry for the given namespace
    ///
    /// The namespace label only appears in diagnostics; it does not affect
    /// lookup semantics.
    pub fn new(namespace: &'static str) -> Self {
        Self {
            entries: HashMap::new(),
            namespace,
            missing_lookups: AtomicU64::new(0),
        }
    }

    /// Register a factory under a type identifier
    ///
    /// Identifiers are namespaced by convention as `"Extension::Type"`. If
    /// the identifier is already registered the previous entry is replaced
    /// silently; extensions rely on this to override base types.
    pub fn register(&mut self, identifier: impl Into<String>, factory: Arc<F>) {
        let identifier = identifier.into();
        if self.entries.insert(identifier.clone(), factory).is_some() {
            log::debug!(
                "Re-registered {} type \"{}\" (previous entry replaced)",
                self.namespace,
                identifier
            );
        }
    }

    /// Resolve a type identifier to its registered factory
    ///
    /// If the identifier is unknown, emits one warning and returns the
    /// factory registered under [`DEFAULT_TYPE`]. Project data is produced
    /// by an external editor and may reference types from extensions that
    /// are not currently loaded; resolution degrades to the default type
    /// instead of failing.
    ///
    /// # Panics
    ///
    /// Panics if the identifier is unknown and no factory is registered
    /// under [`DEFAULT_TYPE`]. That is a contract violation by the
    /// initialization sequence: the engine must register the default type
    /// before any extension runs.
    pub fn resolve(&self, identifier: &str) -> Arc<F> {
        if let Some(entry) = self.entries.get(identifier) {
            return Arc::clone(entry);
        }

        self.missing_lookups.fetch_add(1, Ordering::Relaxed);
        log::warn!(
            "No {} type registered for \"{}\", falling back to the default type",
            self.namespace,
            identifier
        );

        match self.entries.get(DEFAULT_TYPE) {
            Some(entry) => Arc::clone(entry),
            None => panic!(
                "default {} type is not registered; the engine must register it before extensions load",
                self.namespace
            ),
        }
    }

    /// Check whether an identifier is registered
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Number of registered type identifiers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups that missed and fell back to the default type
    ///
    /// Advisory diagnostic counter; never alters control flow.
    pub fn missing_lookups(&self) -> u64 {
        self.missing_lookups.load(Ordering::Relaxed)
    }
}
