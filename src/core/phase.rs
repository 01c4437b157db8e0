//! The discrete phase of the tally counter.
//!
//! The phase tracks whether the last attempted transition hit a bound.
//! It is mutated only by the machine's dispatch path; callers observe it
//! through read-only accessors.

use serde::{Deserialize, Serialize};

/// The discrete mode of the counter.
///
/// `MinReached` and `MaxReached` mean the count sits at the corresponding
/// bound *and* the last attempted step in that direction was refused.
/// Any successful increment, decrement, or reset returns the phase to
/// `Normal`.
///
/// # Example
///
/// ```rust
/// use tally::core::Phase;
///
/// assert_eq!(Phase::default(), Phase::Normal);
/// assert!(Phase::MaxReached.is_boundary());
/// assert!(!Phase::Normal.is_boundary());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// The counter is between bounds; increments and decrements apply.
    #[default]
    Normal,
    /// The count sits at the lower bound after a refused decrement.
    MinReached,
    /// The count sits at the upper bound after a refused increment.
    MaxReached,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::MinReached => "min-reached",
            Self::MaxReached => "max-reached",
        }
    }

    /// Check whether this phase marks a bound that was just hit.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::MinReached | Self::MaxReached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_name_returns_correct_value() {
        assert_eq!(Phase::Normal.name(), "normal");
        assert_eq!(Phase::MinReached.name(), "min-reached");
        assert_eq!(Phase::MaxReached.name(), "max-reached");
    }

    #[test]
    fn is_boundary_identifies_bound_phases() {
        assert!(!Phase::Normal.is_boundary());
        assert!(Phase::MinReached.is_boundary());
        assert!(Phase::MaxReached.is_boundary());
    }

    #[test]
    fn default_phase_is_normal() {
        assert_eq!(Phase::default(), Phase::Normal);
    }

    #[test]
    fn phase_serializes_with_kebab_case_names() {
        assert_eq!(
            serde_json::to_string(&Phase::MinReached).unwrap(),
            "\"min-reached\""
        );
        let deserialized: Phase = serde_json::from_str("\"max-reached\"").unwrap();
        assert_eq!(deserialized, Phase::MaxReached);
    }
}
