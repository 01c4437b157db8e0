//! Build errors for the machine builder.

use crate::core::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a tally machine.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The alert surface is a required collaborator; a machine without
    /// one could drop notifications silently.
    #[error("No alert surface supplied. Call .notifier(surface) before .build()")]
    MissingNotifier,

    /// The configuration cannot hold the counter's invariants. Every
    /// violation found is reported, not just the first.
    #[error("Invalid counter configuration ({} violation(s))", .0.len())]
    InvalidConfig(Vec<ConfigViolation>),
}
