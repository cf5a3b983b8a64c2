//! Runtime orchestration for the pursuit simulation.
//!
//! This crate drives a [`pursuit_core::TurnEngine`] on tokio and provides the
//! presentation handlers the engine calls into. Consumers build a
//! [`TurnDriver`], subscribe to its [`EventBus`], and await
//! [`TurnDriver::run_until`] with their own shutdown signal.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the turn driver and its configuration
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides the broadcast bus for turn events
//! - [`handlers`] implements the engine's renderer and notifier traits
pub mod api;
pub mod events;
pub mod handlers;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use events::{EventBus, TurnEvent};
pub use handlers::{TextRenderer, TracingNotifier};
pub use runtime::{DriverConfig, DriverOutcome, GameSummary, TurnDriver};
