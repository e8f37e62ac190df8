//! Typed gateway events.
//!
//! The gateway never navigates: on an authorization failure it emits a
//! [`GatewayEvent`] here, and the app shell translates the event into a
//! redirect. This keeps the networking layer free of navigation concerns
//! and independently testable.

use tokio::sync::broadcast;

/// Events emitted by the API gateway for the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    /// A non-login endpoint answered 401. The credential store has already
    /// been cleared; the subscriber is expected to navigate to the login
    /// view.
    Unauthorized {
        /// Path of the rejected request.
        path: String,
    },
}

/// Broadcast channel for gateway events.
///
/// Cloneable handle; the gateway holds one end, the shell subscribes on the
/// other. Events are fire-and-forget: emitting with no live subscriber is
/// not an error.
#[derive(Debug, Clone)]
pub struct GatewayEvents {
    tx: broadcast::Sender<GatewayEvent>,
}

impl GatewayEvents {
    /// Creates a bus retaining up to `capacity` undelivered events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribes to events emitted after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<GatewayEvent> {
        self.tx.subscribe()
    }

    /// Emits an event to all current subscribers.
    pub fn emit(&self, event: GatewayEvent) {
        // A send error only means nobody is listening right now.
        let _ = self.tx.send(event);
    }
}

impl Default for GatewayEvents {
    fn default() -> Self {
        Self::new(16)
    }
}
