//! Pure transition planning over the `(Phase, Action)` table.
//!
//! `plan` computes what a dispatch should do without mutating anything;
//! the machine applies the resulting [`Step`] and performs the side
//! effects it calls for. The match is exhaustive, so the transition set
//! is checked by the compiler.

use super::action::Action;
use super::bounds::{Bound, Bounds};
use super::phase::Phase;

/// Planned outcome of dispatching a single action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The count moves by one and the phase returns to `Normal`.
    Advanced { count: i64 },

    /// A bound was hit for the first time: the count holds, the phase
    /// flips to the boundary phase, and no notification fires.
    Saturated { phase: Phase },

    /// A repeat attempt while already at a bound: nothing changes and a
    /// notification fires for the refused action.
    Blocked { bound: Bound, action: Action },

    /// The count returns to zero; always accompanied by a success
    /// notification, regardless of the phase it was dispatched from.
    Reset,
}

/// Plan the effect of `action` from the current `(phase, count)`.
///
/// Expects `count` within `bounds`; the machine maintains that invariant
/// between calls.
///
/// # Example
///
/// ```rust
/// use tally::core::{plan, Action, Bounds, Phase, Step};
///
/// let bounds = Bounds::default();
/// assert_eq!(
///     plan(Phase::Normal, 5, Action::Increment, &bounds),
///     Step::Advanced { count: 6 },
/// );
/// assert_eq!(
///     plan(Phase::Normal, bounds.max(), Action::Increment, &bounds),
///     Step::Saturated { phase: Phase::MaxReached },
/// );
/// ```
pub fn plan(phase: Phase, count: i64, action: Action, bounds: &Bounds) -> Step {
    match (phase, action) {
        // Reset is accepted from every phase and always succeeds.
        (_, Action::Reset) => Step::Reset,

        (Phase::Normal, Action::Increment) => {
            if bounds.at_max(count) {
                Step::Saturated {
                    phase: Phase::MaxReached,
                }
            } else {
                Step::Advanced { count: count + 1 }
            }
        }

        (Phase::Normal, Action::Decrement) => {
            if bounds.at_min(count) {
                Step::Saturated {
                    phase: Phase::MinReached,
                }
            } else {
                Step::Advanced { count: count - 1 }
            }
        }

        // Stepping away from a bound always succeeds: the boundary
        // phases imply the count sits at min or max, and min < max.
        (Phase::MinReached, Action::Increment) => Step::Advanced { count: count + 1 },
        (Phase::MaxReached, Action::Decrement) => Step::Advanced { count: count - 1 },

        // Self-loops at the bounds: the only transitions that notify
        // without changing the count.
        (Phase::MinReached, Action::Decrement) => Step::Blocked {
            bound: Bound::Lower,
            action,
        },
        (Phase::MaxReached, Action::Increment) => Step::Blocked {
            bound: Bound::Upper,
            action,
        },
    }
}
