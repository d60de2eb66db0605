//! Foundation module - Core utilities shared by the runtime
//!
//! This module provides the fundamental utilities used throughout the
//! extensibility core:
//! - Logging utilities and diagnostic output

pub mod logging;
