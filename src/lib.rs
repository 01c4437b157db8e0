//! Tally: a bounded counter state machine
//!
//! Tally implements the counting core of a tally counter application:
//! an integer count confined to a closed interval, a phase tag that
//! distinguishes boundary states from normal operation, and toast
//! notifications fired on specific transitions. The core follows a
//! "pure core, imperative shell" split: transition planning is a pure
//! function over the `(Phase, Action)` table, and the machine applies
//! planned steps and delivers notifications to an injected surface.
//!
//! # Core Concepts
//!
//! - **Phase**: the discrete mode of the counter (`Normal`,
//!   `MinReached`, `MaxReached`) tracking whether a bound was just hit
//! - **Dispatch**: the single mutation path; the count and phase cannot
//!   be written from outside the machine
//! - **Notifier**: the injected alert surface, notified on blocked
//!   repeat attempts at a bound and on every reset
//!
//! # Example
//!
//! ```rust
//! use tally::{Action, MachineBuilder, Phase};
//! use tally::notify::RecordingNotifier;
//!
//! let surface = RecordingNotifier::new();
//! let mut machine = MachineBuilder::new()
//!     .notifier(surface.clone())
//!     .build()
//!     .expect("default configuration is valid");
//!
//! machine.dispatch(Action::Increment);
//! machine.dispatch(Action::Increment);
//! assert_eq!(machine.count(), 2);
//! assert_eq!(machine.phase(), Phase::Normal);
//!
//! machine.dispatch(Action::Reset);
//! assert_eq!(machine.count(), 0);
//! assert_eq!(surface.sent().len(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod notify;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{Action, Bounds, Phase, TransitionLog, TransitionRecord};
pub use crate::machine::TallyMachine;
pub use crate::notify::{Notification, Notifier, Severity};
