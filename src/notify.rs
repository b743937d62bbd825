//! Transient notifications — the side channel for cell interactions.
//!
//! DESIGN
//! ======
//! Cell listeners never return anything. They push a message through a
//! `Notifier`, and whoever owns the notifier decides how it reaches the user.
//! The HTTP layer uses `ChannelNotifier`, a bounded per-view queue that is
//! drained into notification frames after each event.

use tokio::sync::mpsc;
use tracing::warn;

/// Button kinds named in click notifications.
pub const TEMPLATE_BUTTON: &str = "template button";
pub const COMPONENT_BUTTON: &str = "component button";

/// One message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// Receiver of transient user-facing messages.
pub trait Notifier: Send + Sync {
    fn show(&self, message: String);
}

/// `"Clicked row {row} {kind} column {column}"`.
#[must_use]
pub fn clicked_message(kind: &str, row: u32, column: usize) -> String {
    format!("Clicked row {row} {kind} column {column}")
}

/// `"Selected value {value} in row {row} component combo-box column {column}"`.
#[must_use]
pub fn selected_message(value: &str, row: u32, column: usize) -> String {
    format!("Selected value {value} in row {row} component combo-box column {column}")
}

// =============================================================================
// CHANNEL NOTIFIER
// =============================================================================

/// Notifier backed by a bounded queue. Messages beyond capacity are dropped
/// with a warning rather than blocking the event handler.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: mpsc::Sender<Notification>,
}

impl ChannelNotifier {
    #[must_use]
    pub fn new(tx: mpsc::Sender<Notification>) -> Self {
        Self { tx }
    }

    /// Create a notifier together with the receiving end of its queue.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }
}

impl Notifier for ChannelNotifier {
    fn show(&self, message: String) {
        if let Err(e) = self.tx.try_send(Notification { message }) {
            warn!(error = %e, "notification dropped");
        }
    }
}

/// Drain every notification currently queued, without waiting.
pub fn drain(rx: &mut mpsc::Receiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Ok(notification) = rx.try_recv() {
        out.push(notification);
    }
    out
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
