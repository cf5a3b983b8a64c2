//! Broadcast event bus for turn events.
//!
//! The driver publishes one or more [`TurnEvent`]s per turn; any number of
//! consumers may subscribe and receive them in order.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::TurnEvent;
