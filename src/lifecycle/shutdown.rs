//! Shutdown coordination.
//!
//! The server itself never installs signal handlers; the coordinator exists
//! so an owner (the binary, or a test doing construct-bind-teardown) can end
//! a serve loop deliberately and get the port back.

use tokio::sync::broadcast;

/// Coordinator for ending a serve loop.
///
/// Wraps a broadcast channel: the serve loop holds a receiver and drains
/// gracefully when a value arrives.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of listeners still subscribed.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
