//! Logging utilities and diagnostic output
//!
//! All advisory diagnostics in the runtime (unresolved type identifiers,
//! deprecated API invocations) go through the `log` facade. Diagnostics are
//! advisory only and never alter control flow.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Call once at process startup, before any extension registers itself.
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system for test runs
///
/// Safe to call from multiple tests; repeat initialization is ignored.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
