//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the driver and handlers can stay focused on orchestration and presentation.

pub mod errors;

pub use errors::{Result, RuntimeError};
