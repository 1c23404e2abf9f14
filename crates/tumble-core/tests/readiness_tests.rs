// Host-side tests for the asset readiness gate.

use tumble_core::ReadinessGate;

#[test]
fn zero_assets_is_ready_immediately() {
    let gate = ReadinessGate::new(0);
    assert!(gate.is_ready());
}

#[test]
fn flips_exactly_once_at_the_total() {
    let mut gate = ReadinessGate::new(4);
    assert!(!gate.is_ready());
    for i in 0..3 {
        assert!(!gate.settle(), "settle {i} must not flip");
        assert!(!gate.is_ready());
    }
    assert!(gate.settle(), "final settle flips the gate");
    assert!(gate.is_ready());
}

#[test]
fn extra_settles_are_ignored() {
    let mut gate = ReadinessGate::new(2);
    gate.settle();
    assert!(gate.settle());
    // a spurious late event must not report a second flip
    assert!(!gate.settle());
    assert!(gate.is_ready());
    assert_eq!(gate.settled(), 2);
}

#[test]
fn errored_assets_count_as_settled() {
    // the gate has no notion of success; a load error settles the same
    // way, so one broken asset cannot stall the showcase
    let mut gate = ReadinessGate::new(2);
    assert!(!gate.settle()); // loadeddata
    assert!(gate.settle()); // error
}
