//! Counter bounds and configuration validation.
//!
//! The count is confined to a closed interval. Validation accumulates
//! every violation it finds instead of stopping at the first, so a
//! misconfigured builder reports all problems in a single pass.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Count value a new machine starts at, and the target of every reset.
pub const DEFAULT_COUNT: i64 = 0;

/// Default lower bound for the count.
pub const MIN_COUNT: i64 = -10;

/// Default upper bound for the count.
pub const MAX_COUNT: i64 = 10;

/// Which limit of the interval was hit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bound {
    /// The lower bound (`min`).
    Lower,
    /// The upper bound (`max`).
    Upper,
}

/// The closed interval the count must stay within.
///
/// Invariant: `min < max` and the reset target `0` lies inside the
/// interval. `Bounds::new` does not enforce this by itself; the machine
/// builder rejects any configuration whose [`violations`](Bounds::violations)
/// are non-empty.
///
/// # Example
///
/// ```rust
/// use tally::core::Bounds;
///
/// let bounds = Bounds::default();
/// assert_eq!(bounds.min(), -10);
/// assert_eq!(bounds.max(), 10);
/// assert!(bounds.contains(0));
/// assert!(!bounds.contains(11));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Bounds {
    min: i64,
    max: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(MIN_COUNT, MAX_COUNT)
    }
}

impl Bounds {
    /// Create bounds with the given limits.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// The lower bound, inclusive.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// The upper bound, inclusive.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Check whether a count lies inside the closed interval.
    pub fn contains(&self, count: i64) -> bool {
        self.min <= count && count <= self.max
    }

    /// Check whether a count sits at the lower bound.
    pub fn at_min(&self, count: i64) -> bool {
        count == self.min
    }

    /// Check whether a count sits at the upper bound.
    pub fn at_max(&self, count: i64) -> bool {
        count == self.max
    }

    /// Collect every violation in this configuration.
    ///
    /// Returns an empty vector when the bounds are usable. Violations do
    /// not shadow each other: an empty interval that also excludes the
    /// reset target reports both problems.
    pub fn violations(&self) -> Vec<ConfigViolation> {
        let mut violations = Vec::new();

        if self.min >= self.max {
            violations.push(ConfigViolation::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }

        if !self.contains(DEFAULT_COUNT) {
            violations.push(ConfigViolation::ResetOutsideBounds {
                min: self.min,
                max: self.max,
            });
        }

        violations
    }
}

/// A single problem found while validating machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("Lower bound ({min}) must be strictly below upper bound ({max})")]
    EmptyRange { min: i64, max: i64 },

    #[error("Reset target (0) lies outside [{min}, {max}]")]
    ResetOutsideBounds { min: i64, max: i64 },

    #[error("Initial count ({count}) lies outside [{min}, {max}]")]
    InitialOutsideBounds { count: i64, min: i64, max: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_match_constants() {
        let bounds = Bounds::default();
        assert_eq!(bounds.min(), MIN_COUNT);
        assert_eq!(bounds.max(), MAX_COUNT);
    }

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let bounds = Bounds::new(-2, 3);
        assert!(bounds.contains(-2));
        assert!(bounds.contains(3));
        assert!(bounds.contains(0));
        assert!(!bounds.contains(-3));
        assert!(!bounds.contains(4));
    }

    #[test]
    fn at_min_and_at_max_detect_saturation() {
        let bounds = Bounds::new(-2, 3);
        assert!(bounds.at_min(-2));
        assert!(!bounds.at_min(0));
        assert!(bounds.at_max(3));
        assert!(!bounds.at_max(0));
    }

    #[test]
    fn valid_bounds_have_no_violations() {
        assert!(Bounds::default().violations().is_empty());
        assert!(Bounds::new(-1, 1).violations().is_empty());
    }

    #[test]
    fn empty_range_is_a_violation() {
        let violations = Bounds::new(5, 5).violations();
        assert!(violations
            .iter()
            .any(|v| matches!(v, ConfigViolation::EmptyRange { .. })));
    }

    #[test]
    fn bounds_excluding_zero_are_a_violation() {
        let violations = Bounds::new(1, 10).violations();
        assert!(violations
            .iter()
            .any(|v| matches!(v, ConfigViolation::ResetOutsideBounds { .. })));
    }

    #[test]
    fn violations_accumulate_instead_of_failing_fast() {
        // Inverted bounds that also exclude zero: both problems reported.
        let violations = Bounds::new(7, 3).violations();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn bounds_roundtrip_through_json() {
        let bounds = Bounds::new(-5, 5);
        let json = serde_json::to_string(&bounds).unwrap();
        let deserialized: Bounds = serde_json::from_str(&json).unwrap();
        assert_eq!(bounds, deserialized);
    }
}
