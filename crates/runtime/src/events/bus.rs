//! Broadcast event bus implementation.

use tokio::sync::broadcast;

use super::types::TurnEvent;

/// Single-topic broadcast bus.
///
/// Publishing never blocks; slow subscribers observe `Lagged` errors rather
/// than stalling the driver.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<TurnEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with the specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tx: broadcast::channel(capacity.max(1)).0,
        }
    }

    /// Publish an event to all current subscribers
    pub fn publish(&self, event: TurnEvent) {
        if self.tx.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("No subscribers for turn events");
        }
    }

    /// Subscribe to all events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<TurnEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
