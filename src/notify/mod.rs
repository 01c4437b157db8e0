//! Notification delivery to the alert surface.
//!
//! The machine's only outbound interface: a [`Notification`] carrying a
//! severity, title, and message, delivered synchronously to an injected
//! [`Notifier`]. The surface may animate or queue asynchronously on its
//! own; the machine does not wait on it.

mod escape;
mod notification;
mod surface;

pub use escape::escape_html;
pub use notification::{Notification, Severity};
pub use surface::{Notifier, RecordingNotifier, TracingNotifier};
