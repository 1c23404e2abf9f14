// Host-side tests for the intro-to-loop hand-off watcher.

use tumble_core::FanHandoff;

const DURATION: f64 = 4.0;

#[test]
fn does_not_fire_outside_the_window() {
    let mut handoff = FanHandoff::new();
    assert!(!handoff.check(0.0, DURATION));
    assert!(!handoff.check(2.0, DURATION));
    assert!(!handoff.check(DURATION - 0.06, DURATION));
    assert!(!handoff.fired());
}

#[test]
fn fires_inside_the_window() {
    let mut handoff = FanHandoff::new();
    assert!(handoff.check(DURATION - 0.04, DURATION));
    assert!(handoff.fired());
}

#[test]
fn fires_at_the_exact_boundary() {
    let mut handoff = FanHandoff::new();
    assert!(handoff.check(DURATION - FanHandoff::EPSILON_SEC, DURATION));
}

#[test]
fn fires_once_per_arming() {
    let mut handoff = FanHandoff::new();
    assert!(handoff.check(DURATION - 0.03, DURATION));
    // playhead keeps ticking inside the window; no second hand-off
    assert!(!handoff.check(DURATION - 0.02, DURATION));
    assert!(!handoff.check(DURATION, DURATION));
}

#[test]
fn reset_rearms_the_watcher() {
    let mut handoff = FanHandoff::new();
    assert!(handoff.check(DURATION - 0.01, DURATION));
    handoff.reset();
    assert!(!handoff.fired());
    assert!(!handoff.check(1.0, DURATION));
    assert!(handoff.check(DURATION - 0.01, DURATION));
}

#[test]
fn unknown_duration_never_fires() {
    let mut handoff = FanHandoff::new();
    // metadata not loaded yet: duration reads NaN
    assert!(!handoff.check(0.0, f64::NAN));
    assert!(!handoff.check(5.0, 0.0));
    assert!(!handoff.check(5.0, f64::INFINITY));
    assert!(!handoff.fired());
}
