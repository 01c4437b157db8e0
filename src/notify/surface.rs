//! The injected alert surface and built-in implementations.

use super::notification::{Notification, Severity};
use parking_lot::Mutex;
use std::sync::Arc;

/// The alert surface notifications are delivered to.
///
/// The surface is supplied to the machine at construction time, making
/// the collaborator explicit and testable instead of being located
/// through a global lookup. Delivery is fire-and-forget: the machine
/// does not wait for acknowledgment and never retries.
pub trait Notifier: Send {
    /// Deliver a notification to the surface.
    fn notify(&mut self, notification: &Notification);
}

/// Surface that forwards notifications to `tracing` events.
///
/// Useful as a default surface for headless deployments; severity picks
/// the event level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: &Notification) {
        match notification.severity {
            Severity::Danger => tracing::error!(
                title = %notification.title,
                "{}", notification.message
            ),
            Severity::Warning => tracing::warn!(
                title = %notification.title,
                "{}", notification.message
            ),
            _ => tracing::info!(
                severity = notification.severity.name(),
                title = %notification.title,
                "{}", notification.message
            ),
        }
    }
}

/// Surface that buffers notifications for later inspection.
///
/// Clones share one buffer, so a caller can keep a handle while the
/// machine owns another. Used by surfaces that drain on their own
/// cadence, and throughout this crate's tests.
///
/// # Example
///
/// ```rust
/// use tally::notify::{Notification, Notifier, RecordingNotifier};
///
/// let surface = RecordingNotifier::new();
/// let mut handle = surface.clone();
/// handle.notify(&Notification::reset());
///
/// assert_eq!(surface.sent().len(), 1);
/// assert_eq!(surface.take().len(), 1);
/// assert!(surface.sent().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Create a surface with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications delivered so far, in delivery order.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().clone()
    }

    /// Drain the buffer, returning everything delivered so far.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.sent.lock())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: &Notification) {
        self.sent.lock().push(notification.clone());
    }
}
