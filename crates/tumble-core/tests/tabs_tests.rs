// Host-side tests for the tab strip state machine.

use tumble_core::{key_intent, BuildError, TabKey, TabSpec, TabStrip};

fn spec(service: &str) -> TabSpec {
    TabSpec {
        service: Some(service.to_string()),
        panel: Some(format!("panel-{service}")),
        initially_selected: false,
    }
}

fn strip3() -> TabStrip {
    TabStrip::new(vec![spec("wash"), spec("dry"), spec("fold")]).unwrap()
}

#[test]
fn empty_markup_is_rejected() {
    assert_eq!(TabStrip::new(vec![]).unwrap_err(), BuildError::NoTabs);
}

#[test]
fn first_tab_selected_without_marker() {
    let strip = strip3();
    assert_eq!(strip.selected(), 0);
    assert_eq!(strip.focused(), 0);
    assert_eq!(strip.active_service(), Some("wash"));
}

#[test]
fn marked_tab_wins_initial_selection() {
    let mut tabs = vec![spec("wash"), spec("dry"), spec("fold")];
    tabs[1].initially_selected = true;
    let strip = TabStrip::new(tabs).unwrap();
    assert_eq!(strip.selected(), 1);
    assert_eq!(strip.active_service(), Some("dry"));
}

#[test]
fn activation_keeps_exactly_one_selected() {
    let mut strip = strip3();
    for &index in &[2usize, 0, 1, 1, 2] {
        strip.activate(index).unwrap();
        assert_eq!(strip.selected(), index);
        for i in 0..strip.len() {
            assert_eq!(strip.is_selected(i), i == index, "tab {i} after activate({index})");
        }
    }
}

#[test]
fn activation_emits_service_id() {
    let mut strip = strip3();
    let change = strip.activate(1).unwrap();
    assert_eq!(change.id.as_deref(), Some("dry"));
}

#[test]
fn tab_without_service_emits_none() {
    let mut strip = TabStrip::new(vec![
        spec("wash"),
        TabSpec {
            service: None,
            panel: Some("panel-misc".into()),
            initially_selected: false,
        },
    ])
    .unwrap();
    let change = strip.activate(1).unwrap();
    assert_eq!(change.id, None);
}

#[test]
fn reactivation_still_emits() {
    let mut strip = strip3();
    strip.activate(1).unwrap();
    // the second activation of the same tab is not suppressed
    let change = strip.activate(1).unwrap();
    assert_eq!(change.id.as_deref(), Some("dry"));
}

#[test]
fn out_of_range_activation_is_noop() {
    let mut strip = strip3();
    assert!(strip.activate(7).is_none());
    assert_eq!(strip.selected(), 0);
}

#[test]
fn activate_service_by_id() {
    let mut strip = strip3();
    let change = strip.activate_service("fold").unwrap();
    assert_eq!(change.id.as_deref(), Some("fold"));
    assert_eq!(strip.selected(), 2);
}

#[test]
fn unknown_service_id_is_noop() {
    let mut strip = strip3();
    assert!(strip.activate_service("iron").is_none());
    assert_eq!(strip.selected(), 0);
    assert_eq!(strip.active_service(), Some("wash"));
}

#[test]
fn focus_wraps_in_both_directions() {
    let strip = strip3();
    assert_eq!(strip.step_from(2, 1), 0, "next from last wraps to first");
    assert_eq!(strip.step_from(0, -1), 2, "previous from first wraps to last");
    assert_eq!(strip.step_from(1, 1), 2);
    assert_eq!(strip.step_from(1, -1), 0);
}

#[test]
fn key_targets_follow_manual_activation_pattern() {
    let strip = strip3();
    assert_eq!(strip.key_target(1, TabKey::FocusPrev), 0);
    assert_eq!(strip.key_target(1, TabKey::FocusNext), 2);
    assert_eq!(strip.key_target(2, TabKey::FocusFirst), 0);
    assert_eq!(strip.key_target(0, TabKey::FocusLast), 2);
    assert_eq!(strip.key_target(1, TabKey::Activate), 1);
}

#[test]
fn key_intent_mapping() {
    assert_eq!(key_intent("ArrowLeft"), Some(TabKey::FocusPrev));
    assert_eq!(key_intent("ArrowUp"), Some(TabKey::FocusPrev));
    assert_eq!(key_intent("ArrowRight"), Some(TabKey::FocusNext));
    assert_eq!(key_intent("ArrowDown"), Some(TabKey::FocusNext));
    assert_eq!(key_intent("Home"), Some(TabKey::FocusFirst));
    assert_eq!(key_intent("End"), Some(TabKey::FocusLast));
    assert_eq!(key_intent("Enter"), Some(TabKey::Activate));
    assert_eq!(key_intent(" "), Some(TabKey::Activate));
    assert_eq!(key_intent("Spacebar"), Some(TabKey::Activate));
    assert_eq!(key_intent("Tab"), None);
    assert_eq!(key_intent("a"), None);
}

#[test]
fn roving_tabindex_follows_focus_and_activation() {
    let mut strip = strip3();
    strip.set_focused(2);
    assert_eq!(strip.focused(), 2);
    // activation pulls focus bookkeeping along
    strip.activate(1).unwrap();
    assert_eq!(strip.focused(), 1);
    // out-of-range focus updates are ignored
    strip.set_focused(9);
    assert_eq!(strip.focused(), 1);
}
