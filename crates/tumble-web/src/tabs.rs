//! DOM wiring for the accessible service tabs.
//!
//! State lives in [`TabStrip`]; this module projects it onto the markup
//! (aria attributes, roving tabindex, panel visibility) and broadcasts a
//! `serviceChange` CustomEvent on every activation so the media sequencer
//! and any page script can react without a direct reference to us.

use crate::constants::{
    ACTIVE_TAB_CLASS, ANIMATION_AREA_ID, PANEL_FADE_CLASS, PANEL_SELECTOR, SERVICE_CHANGE_EVENT,
    TABLIST_SELECTOR, TAB_SELECTOR,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use tumble_core::{key_intent, ServiceChange, TabKey, TabSpec, TabStrip};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct TabsDom {
    strip: RefCell<TabStrip>,
    tabs: Vec<web::HtmlElement>,
    panels: Vec<web::HtmlElement>,
    animation_area: Option<web::Element>,
}

thread_local! {
    /// Registry backing the exported page-script API.
    static TABS: RefCell<Option<Rc<TabsDom>>> = const { RefCell::new(None) };
}

pub fn init(document: &web::Document) {
    let tab_els: Vec<web::HtmlElement> = dom::query_all(document, TAB_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let panel_els: Vec<web::HtmlElement> = dom::query_all(document, PANEL_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let tablist = document.query_selector(TABLIST_SELECTOR).ok().flatten();
    if tab_els.is_empty() || panel_els.is_empty() || tablist.is_none() {
        // tabs are optional page furniture; leave the markup untouched
        return;
    }

    let specs: Vec<TabSpec> = tab_els
        .iter()
        .map(|el| TabSpec {
            service: el.get_attribute("data-service"),
            panel: el.get_attribute("aria-controls"),
            initially_selected: el.get_attribute("aria-selected").as_deref() == Some("true"),
        })
        .collect();
    let Ok(strip) = TabStrip::new(specs) else {
        return;
    };

    let controller = Rc::new(TabsDom {
        strip: RefCell::new(strip),
        tabs: tab_els,
        panels: panel_els,
        animation_area: document.get_element_by_id(ANIMATION_AREA_ID),
    });

    for (i, tab) in controller.tabs.iter().enumerate() {
        let _ = tab.set_attribute("role", "tab");
        wire_tab(&controller, i);
    }
    // panels must be focus targets for the activate-with-focus path
    for panel in &controller.panels {
        if !panel.has_attribute("tabindex") {
            let _ = panel.set_attribute("tabindex", "-1");
        }
    }

    // initial activation pass, no focus movement
    let initial = controller.strip.borrow().selected();
    activate(&controller, initial, false);
    log::info!("[tabs] wired {} tabs", controller.tabs.len());

    TABS.with(|slot| *slot.borrow_mut() = Some(controller));
}

fn wire_tab(controller: &Rc<TabsDom>, index: usize) {
    let tab = &controller.tabs[index];

    {
        let c = controller.clone();
        dom::add_listener(tab, "click", move |ev| {
            ev.prevent_default();
            activate(&c, index, false);
            if let Some(t) = c.tabs.get(index) {
                let _ = t.focus();
            }
        });
    }

    {
        let c = controller.clone();
        dom::add_listener(tab, "keydown", move |ev| {
            let Some(key) = ev.dyn_ref::<web::KeyboardEvent>().map(|k| k.key()) else {
                return;
            };
            let Some(intent) = key_intent(&key) else {
                return;
            };
            ev.prevent_default();
            if intent == TabKey::Activate {
                activate(&c, index, false);
                if let Some(t) = c.tabs.get(index) {
                    let _ = t.focus();
                }
            } else {
                let target = c.strip.borrow().key_target(index, intent);
                if let Some(t) = c.tabs.get(target) {
                    let _ = t.focus();
                }
            }
        });
    }

    {
        let c = controller.clone();
        dom::add_listener(tab, "focus", move |_ev| {
            // focusing a tab by any means moves the roving tabindex to it
            c.strip.borrow_mut().set_focused(index);
            apply_roving_tabindex(&c);
        });
    }
}

fn apply_roving_tabindex(controller: &TabsDom) {
    let focused = controller.strip.borrow().focused();
    for (i, tab) in controller.tabs.iter().enumerate() {
        let _ = tab.set_attribute("tabindex", if i == focused { "0" } else { "-1" });
    }
}

/// Project an activation onto the DOM: every tab deselected and every
/// panel hidden in the same synchronous pass, then the chosen pair
/// selected/shown, then the broadcast.
fn activate(controller: &Rc<TabsDom>, index: usize, focus_panel: bool) {
    let change = controller.strip.borrow_mut().activate(index);
    let Some(change) = change else {
        return;
    };

    let panel_id = {
        let strip = controller.strip.borrow();
        for (i, tab) in controller.tabs.iter().enumerate() {
            let selected = strip.is_selected(i);
            let _ = tab.set_attribute("aria-selected", if selected { "true" } else { "false" });
            if selected {
                let _ = tab.class_list().add_1(ACTIVE_TAB_CLASS);
            } else {
                let _ = tab.class_list().remove_1(ACTIVE_TAB_CLASS);
            }
        }
        strip.tab(index).and_then(|t| t.panel.clone())
    };
    apply_roving_tabindex(controller);

    for panel in &controller.panels {
        set_panel_hidden(panel, true);
    }
    if let Some(panel) = panel_id
        .as_deref()
        .and_then(|id| controller.panels.iter().find(|p| p.id() == id))
    {
        set_panel_hidden(panel, false);
        restart_fade(panel);
        if focus_panel {
            let _ = panel.focus();
        }
    }

    broadcast(&change);
    if let Some(area) = &controller.animation_area {
        let _ = area.set_attribute("data-active-service", change.id.as_deref().unwrap_or(""));
    }
}

fn set_panel_hidden(panel: &web::HtmlElement, hidden: bool) {
    panel.set_hidden(hidden);
    let _ = panel.set_attribute("aria-hidden", if hidden { "true" } else { "false" });
}

/// Remove and re-add the entrance animation class with a forced layout
/// read in between; without the flush the browser coalesces both class
/// mutations and the animation never restarts.
fn restart_fade(panel: &web::HtmlElement) {
    let _ = panel.class_list().remove_1(PANEL_FADE_CLASS);
    dom::force_reflow(panel);
    let _ = panel.class_list().add_1(PANEL_FADE_CLASS);
}

fn broadcast(change: &ServiceChange) {
    let Some(window) = web::window() else {
        return;
    };
    let detail = js_sys::Object::new();
    let id_value = match &change.id {
        Some(id) => JsValue::from_str(id),
        None => JsValue::NULL,
    };
    let _ = js_sys::Reflect::set(&detail, &JsValue::from_str("id"), &id_value);
    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    if let Ok(ev) = web::CustomEvent::new_with_event_init_dict(SERVICE_CHANGE_EVENT, &init) {
        let _ = window.dispatch_event(&ev);
    }
}

pub fn activate_service(id: &str) {
    TABS.with(|slot| {
        let Some(controller) = slot.borrow().clone() else {
            return;
        };
        let index = controller.strip.borrow().index_of_service(id);
        if let Some(index) = index {
            activate(&controller, index, true);
        }
    });
}

pub fn active_service() -> Option<String> {
    TABS.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|c| c.strip.borrow().active_service().map(str::to_string))
    })
}
