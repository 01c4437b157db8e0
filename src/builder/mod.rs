//! Builder API for constructing tally machines.
//!
//! The builder is the one place configuration enters the system: bounds,
//! the initial count, and the injected alert surface. Validation
//! accumulates every violation before failing, so a misconfigured
//! machine reports all of its problems in a single pass.

mod error;

pub use error::BuildError;

use crate::core::{Bounds, ConfigViolation, DEFAULT_COUNT};
use crate::machine::TallyMachine;
use crate::notify::Notifier;

/// Builder for constructing tally machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use tally::MachineBuilder;
/// use tally::notify::TracingNotifier;
///
/// let machine = MachineBuilder::new()
///     .bounds(-5, 5)
///     .initial_count(3)
///     .notifier(TracingNotifier)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.count(), 3);
/// ```
pub struct MachineBuilder {
    bounds: Bounds,
    initial_count: Option<i64>,
    notifier: Option<Box<dyn Notifier>>,
}

impl MachineBuilder {
    /// Create a builder with default bounds and count.
    pub fn new() -> Self {
        Self {
            bounds: Bounds::default(),
            initial_count: None,
            notifier: None,
        }
    }

    /// Set the inclusive bounds for the count (optional).
    pub fn bounds(mut self, min: i64, max: i64) -> Self {
        self.bounds = Bounds::new(min, max);
        self
    }

    /// Set the count the machine starts at (optional, default `0`).
    pub fn initial_count(mut self, count: i64) -> Self {
        self.initial_count = Some(count);
        self
    }

    /// Set the alert surface (required).
    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Build the machine.
    ///
    /// Fails with [`BuildError::MissingNotifier`] when no surface was
    /// supplied, or [`BuildError::InvalidConfig`] carrying every
    /// violation found in the bounds and initial count.
    pub fn build(self) -> Result<TallyMachine, BuildError> {
        let notifier = self.notifier.ok_or(BuildError::MissingNotifier)?;

        let count = self.initial_count.unwrap_or(DEFAULT_COUNT);
        let mut violations = self.bounds.violations();
        if !self.bounds.contains(count) {
            violations.push(ConfigViolation::InitialOutsideBounds {
                count,
                min: self.bounds.min(),
                max: self.bounds.max(),
            });
        }

        if !violations.is_empty() {
            return Err(BuildError::InvalidConfig(violations));
        }

        Ok(TallyMachine::with_config(self.bounds, count, notifier))
    }
}

impl Default for MachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
