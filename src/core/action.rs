//! Actions that can be dispatched to the tally machine.

use serde::{Deserialize, Serialize};

/// An action performed on the tally counter.
///
/// The action set is closed: an invalid action is unrepresentable, so the
/// transition table over `(Phase, Action)` is exhaustively checked by the
/// compiler rather than looked up at runtime.
///
/// # Example
///
/// ```rust
/// use tally::core::Action;
///
/// assert_eq!(Action::Increment.name(), "increment");
/// assert_eq!(Action::Reset.name(), "reset");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Raise the count by one, saturating at the upper bound.
    Increment,
    /// Lower the count by one, saturating at the lower bound.
    Decrement,
    /// Return the count to zero from any phase.
    #[serde(rename = "resetCounter")]
    Reset,
}

impl Action {
    /// Get the action's name for display/logging.
    ///
    /// The name is the verb used in notification messages
    /// ("Unable to increment tally").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_name_returns_correct_value() {
        assert_eq!(Action::Increment.name(), "increment");
        assert_eq!(Action::Decrement.name(), "decrement");
        assert_eq!(Action::Reset.name(), "reset");
    }

    #[test]
    fn action_serializes_with_dispatch_vocabulary() {
        assert_eq!(
            serde_json::to_string(&Action::Increment).unwrap(),
            "\"increment\""
        );
        assert_eq!(
            serde_json::to_string(&Action::Reset).unwrap(),
            "\"resetCounter\""
        );
    }

    #[test]
    fn action_roundtrips_through_json() {
        let action = Action::Decrement;
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
