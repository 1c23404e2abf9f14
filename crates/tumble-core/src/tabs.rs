//! Accessible service-tab state machine.
//!
//! `TabStrip` keeps the ARIA invariants in the type system: tabs are an
//! immutable, index-addressed collection and selection/focus are single
//! indices, so "zero selected" and "two selected" states are
//! unrepresentable. The web layer projects this state onto the DOM after
//! every transition and broadcasts the resulting [`ServiceChange`].

use thiserror::Error;

/// One selectable service tab as discovered from markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSpec {
    /// Stable service identifier (`data-service`), if the tab carries one.
    pub service: Option<String>,
    /// Id of the content panel this tab controls (`aria-controls`).
    pub panel: Option<String>,
    /// Whether the markup pre-selects this tab.
    pub initially_selected: bool,
}

/// Broadcast payload emitted on every activation, including re-activation
/// of the already-selected tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceChange {
    pub id: Option<String>,
}

/// Keyboard intent for the manual-activation tab pattern: arrows and
/// Home/End move focus only, Enter/Space activate the focused tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabKey {
    FocusPrev,
    FocusNext,
    FocusFirst,
    FocusLast,
    Activate,
}

/// Map a DOM `KeyboardEvent.key` value to a tab intent.
pub fn key_intent(key: &str) -> Option<TabKey> {
    match key {
        "ArrowLeft" | "ArrowUp" => Some(TabKey::FocusPrev),
        "ArrowRight" | "ArrowDown" => Some(TabKey::FocusNext),
        "Home" => Some(TabKey::FocusFirst),
        "End" => Some(TabKey::FocusLast),
        // "Spacebar" is the legacy IE/old-Edge spelling
        "Enter" | " " | "Spacebar" => Some(TabKey::Activate),
        _ => None,
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("no tabs discovered")]
    NoTabs,
}

#[derive(Clone, Debug)]
pub struct TabStrip {
    tabs: Vec<TabSpec>,
    selected: usize,
    focused: usize,
}

impl TabStrip {
    /// Build a strip from discovered markup. The pre-selected tab wins the
    /// initial selection; without one the first tab starts selected.
    pub fn new(tabs: Vec<TabSpec>) -> Result<Self, BuildError> {
        if tabs.is_empty() {
            return Err(BuildError::NoTabs);
        }
        let selected = tabs.iter().position(|t| t.initially_selected).unwrap_or(0);
        Ok(Self {
            selected,
            focused: selected,
            tabs,
        })
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tab(&self, index: usize) -> Option<&TabSpec> {
        self.tabs.get(index)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index holding the roving tabindex.
    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn is_selected(&self, index: usize) -> bool {
        index == self.selected
    }

    /// Service id of the currently selected tab.
    pub fn active_service(&self) -> Option<&str> {
        self.tabs[self.selected].service.as_deref()
    }

    pub fn index_of_service(&self, id: &str) -> Option<usize> {
        self.tabs
            .iter()
            .position(|t| t.service.as_deref() == Some(id))
    }

    /// Select `index` and return the notification to broadcast. Emits even
    /// when the index is already selected; downstream listeners rely on
    /// re-activation (toggle gesture, animation restart). Out-of-range
    /// indices are ignored.
    pub fn activate(&mut self, index: usize) -> Option<ServiceChange> {
        let spec = self.tabs.get(index)?;
        let change = ServiceChange {
            id: spec.service.clone(),
        };
        self.selected = index;
        self.focused = index;
        Some(change)
    }

    /// Id-based activation for the page-script API. Unknown ids are a
    /// no-op.
    pub fn activate_service(&mut self, id: &str) -> Option<ServiceChange> {
        let index = self.index_of_service(id)?;
        self.activate(index)
    }

    /// Wrap-around focus arithmetic from an arbitrary index, both
    /// directions.
    pub fn step_from(&self, current: usize, delta: isize) -> usize {
        let len = self.tabs.len() as isize;
        (((current as isize + delta) % len + len) % len) as usize
    }

    /// Record which tab holds the roving tabindex.
    pub fn set_focused(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.focused = index;
        }
    }

    /// Resolve a focus-movement intent against the listener's own index.
    /// `Activate` stays in place; activation itself goes through
    /// [`TabStrip::activate`].
    pub fn key_target(&self, current: usize, key: TabKey) -> usize {
        match key {
            TabKey::FocusPrev => self.step_from(current, -1),
            TabKey::FocusNext => self.step_from(current, 1),
            TabKey::FocusFirst => 0,
            TabKey::FocusLast => self.tabs.len() - 1,
            TabKey::Activate => current,
        }
    }
}
