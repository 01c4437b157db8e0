//! The imperative shell around the pure core.
//!
//! The machine applies steps planned by `crate::core` and performs the
//! side effects they call for: notification delivery and log events.
//! Dispatch is synchronous and single-threaded; exclusive ownership of
//! the state replaces locking.

mod tally;

pub use tally::TallyMachine;
