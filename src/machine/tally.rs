//! The tally machine: applies planned steps and performs notifications.

use crate::core::{
    plan, Action, Bounds, Phase, Step, TransitionLog, TransitionRecord, DEFAULT_COUNT,
};
use crate::notify::{Notification, Notifier};
use chrono::Utc;
use std::fmt;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// The counter state machine.
///
/// Owns the count, the phase, and the injected alert surface. All
/// mutation goes through [`dispatch`](TallyMachine::dispatch); the fields
/// are private and the accessors return copies, so the count and phase
/// cannot be written from outside the machine.
///
/// # Example
///
/// ```rust
/// use tally::{Action, MachineBuilder, Phase};
/// use tally::notify::RecordingNotifier;
///
/// let surface = RecordingNotifier::new();
/// let mut machine = MachineBuilder::new()
///     .notifier(surface.clone())
///     .build()
///     .unwrap();
///
/// machine.dispatch(Action::Increment);
/// machine.dispatch(Action::Increment);
/// assert_eq!(machine.count(), 2);
/// assert_eq!(machine.phase(), Phase::Normal);
///
/// machine.dispatch(Action::Reset);
/// assert_eq!(machine.count(), 0);
/// assert_eq!(surface.sent().len(), 1);
/// ```
///
/// Direct writes to the state do not compile:
///
/// ```compile_fail
/// use tally::MachineBuilder;
/// use tally::notify::TracingNotifier;
///
/// let mut machine = MachineBuilder::new()
///     .notifier(TracingNotifier)
///     .build()
///     .unwrap();
/// machine.count = 5;
/// ```
pub struct TallyMachine {
    id: Uuid,
    count: i64,
    phase: Phase,
    bounds: Bounds,
    log: TransitionLog,
    notifier: Box<dyn Notifier>,
}

impl TallyMachine {
    /// Create a machine with default bounds, count `0`, phase `Normal`.
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self::with_config(Bounds::default(), DEFAULT_COUNT, Box::new(notifier))
    }

    /// Assemble a machine from validated configuration.
    ///
    /// Callers go through [`MachineBuilder`](crate::builder::MachineBuilder),
    /// which rejects bounds that cannot hold the invariant.
    pub(crate) fn with_config(bounds: Bounds, count: i64, notifier: Box<dyn Notifier>) -> Self {
        Self {
            id: Uuid::new_v4(),
            count,
            phase: Phase::Normal,
            bounds,
            log: TransitionLog::new(),
            notifier,
        }
    }

    /// Unique identifier of this machine instance, for diagnostics.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get the current count (read-only).
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Get the current phase (read-only).
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the configured bounds (read-only).
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Get the transition history (read-only).
    pub fn history(&self) -> &TransitionLog {
        &self.log
    }

    /// Dispatch an action.
    ///
    /// Plans the step with the pure transition table, applies it, records
    /// it in the history, and delivers any notification the step calls
    /// for. Runs to completion before the next dispatch; effects are
    /// observed through the accessors and the alert surface.
    pub fn dispatch(&mut self, action: Action) {
        let from = self.phase;
        let step = plan(self.phase, self.count, action, &self.bounds);
        self.apply(step);

        self.log = self.log.record(TransitionRecord {
            from,
            to: self.phase,
            action,
            count: self.count,
            timestamp: Utc::now(),
        });

        debug_assert!(self.bounds.contains(self.count));
    }

    fn apply(&mut self, step: Step) {
        match step {
            Step::Advanced { count } => {
                self.count = count;
                self.phase = Phase::Normal;
                debug!(machine = %self.id, count, "tally advanced");
            }
            Step::Saturated { phase } => {
                // First hit at a bound: phase flips, count holds, and no
                // notification fires until the next refused attempt.
                self.phase = phase;
                debug!(machine = %self.id, phase = phase.name(), "bound reached");
            }
            Step::Blocked { bound, action } => {
                let notification = Notification::blocked(bound, action);
                warn!(
                    machine = %self.id,
                    action = action.name(),
                    "{}", notification.message
                );
                self.notifier.notify(&notification);
            }
            Step::Reset => {
                self.count = DEFAULT_COUNT;
                self.phase = Phase::Normal;
                info!(machine = %self.id, "tally reset");
                self.notifier.notify(&Notification::reset());
            }
        }
    }
}

// The boxed notifier has no Debug representation; everything else does.
impl fmt::Debug for TallyMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TallyMachine")
            .field("id", &self.id)
            .field("count", &self.count)
            .field("phase", &self.phase)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}
