//! Notification payloads delivered to the alert surface.

use crate::core::{Action, Bound};
use serde::{Deserialize, Serialize};

/// Severity of a notification, selecting the alert surface's theme.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Neutral,
    Warning,
    Danger,
}

impl Severity {
    /// Get the severity's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Neutral => "neutral",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A transient, one-shot message for the alert surface.
///
/// The machine produces exactly two payload shapes: a danger
/// notification for an action refused at a bound, and a success
/// notification for a reset. The message text is treated as untrusted
/// by display surfaces (see [`escape_html`](crate::notify::escape_html)).
///
/// # Example
///
/// ```rust
/// use tally::notify::{Notification, Severity};
///
/// let reset = Notification::reset();
/// assert_eq!(reset.severity, Severity::Success);
/// assert_eq!(reset.message, "Tally Count successfully reset to 0.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Create a notification with an arbitrary payload.
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Danger notification for an action refused at a bound.
    ///
    /// Fires only on a repeat attempt while the machine already sits in
    /// a boundary phase, never on the attempt that first hit the bound.
    pub fn blocked(bound: Bound, action: Action) -> Self {
        let title = match bound {
            Bound::Lower => "Min-Count reached:",
            Bound::Upper => "Max-Count reached:",
        };

        Self::new(
            Severity::Danger,
            title,
            format!("Unable to {} tally", action.name()),
        )
    }

    /// Success notification for a completed reset.
    pub fn reset() -> Self {
        Self::new(
            Severity::Success,
            "Success",
            "Tally Count successfully reset to 0.",
        )
    }
}
