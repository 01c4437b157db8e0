//! End-to-end dispatch flows against a recording alert surface.

use tally::core::{MAX_COUNT, MIN_COUNT};
use tally::notify::RecordingNotifier;
use tally::{Action, MachineBuilder, Phase, Severity, TallyMachine};

fn machine_with_surface() -> (TallyMachine, RecordingNotifier) {
    let surface = RecordingNotifier::new();
    let machine = MachineBuilder::new()
        .notifier(surface.clone())
        .build()
        .unwrap();
    (machine, surface)
}

#[test]
fn counting_session_at_the_upper_bound() {
    let (mut machine, surface) = machine_with_surface();

    // Count up to the bound: all silent, phase stays Normal.
    for expected in 1..=MAX_COUNT {
        machine.dispatch(Action::Increment);
        assert_eq!(machine.count(), expected);
        assert_eq!(machine.phase(), Phase::Normal);
    }
    assert!(surface.sent().is_empty());

    // The attempt that hits the bound flips the phase without a toast.
    machine.dispatch(Action::Increment);
    assert_eq!(machine.count(), MAX_COUNT);
    assert_eq!(machine.phase(), Phase::MaxReached);
    assert!(surface.sent().is_empty());

    // Insisting raises a danger toast; the count never moves.
    machine.dispatch(Action::Increment);
    machine.dispatch(Action::Increment);
    let sent = surface.take();
    assert_eq!(sent.len(), 2);
    assert!(sent
        .iter()
        .all(|n| n.severity == Severity::Danger && n.message == "Unable to increment tally"));
    assert_eq!(machine.count(), MAX_COUNT);

    // Stepping down recovers, and the reset toast closes the session.
    machine.dispatch(Action::Decrement);
    assert_eq!(machine.count(), MAX_COUNT - 1);
    assert_eq!(machine.phase(), Phase::Normal);

    machine.dispatch(Action::Reset);
    assert_eq!(machine.count(), 0);
    let sent = surface.take();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].severity, Severity::Success);
    assert_eq!(sent[0].title, "Success");
}

#[test]
fn counting_session_at_the_lower_bound() {
    let (mut machine, surface) = machine_with_surface();

    for _ in 0..(-MIN_COUNT) {
        machine.dispatch(Action::Decrement);
    }
    assert_eq!(machine.count(), MIN_COUNT);
    assert_eq!(machine.phase(), Phase::Normal);

    machine.dispatch(Action::Decrement);
    assert_eq!(machine.phase(), Phase::MinReached);
    assert!(surface.sent().is_empty());

    machine.dispatch(Action::Decrement);
    let sent = surface.take();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "Min-Count reached:");
    assert_eq!(sent[0].message, "Unable to decrement tally");

    machine.dispatch(Action::Increment);
    assert_eq!(machine.count(), MIN_COUNT + 1);
    assert_eq!(machine.phase(), Phase::Normal);
}

#[test]
fn history_reflects_the_walked_path() {
    let (mut machine, _surface) = machine_with_surface();

    machine.dispatch(Action::Increment);
    machine.dispatch(Action::Decrement);
    machine.dispatch(Action::Reset);

    let log = machine.history();
    assert_eq!(log.records().len(), 3);
    assert_eq!(
        log.path(),
        vec![Phase::Normal, Phase::Normal, Phase::Normal, Phase::Normal]
    );
    assert_eq!(log.records()[0].count, 1);
    assert_eq!(log.records()[1].count, 0);
    assert_eq!(log.records()[2].count, 0);
    assert!(log.duration().is_some());
}
