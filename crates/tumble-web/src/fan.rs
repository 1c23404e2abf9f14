//! Intro-to-loop hand-off for the fan showcase.
//!
//! The fan service binds two clips: a one-shot intro and a looping spin.
//! The sequencer treats them like any other clips (the intro, first in
//! markup order, is what a fan activation reveals); this module watches
//! the intro's playhead and swaps in the loop just before the intro ends.

use crate::constants::{INTRO_SELECTOR, SERVICE_CHANGE_EVENT, SPIN_SELECTOR, VISIBLE_CLASS};
use crate::dom;
use crate::videos;
use std::cell::RefCell;
use std::rc::Rc;
use tumble_core::FanHandoff;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(window: &web::Window, document: &web::Document) {
    let Some(intro) = query_video(document, INTRO_SELECTOR) else {
        return;
    };
    let Some(spin) = query_video(document, SPIN_SELECTOR) else {
        return;
    };
    let service = intro.get_attribute("data-service");
    if service.is_none() || spin.get_attribute("data-service") != service {
        log::warn!("[fan] intro/spin pair not bound to one service; disabled");
        return;
    }

    // the loop clip loops from setup on
    spin.set_loop(true);

    let handoff = Rc::new(RefCell::new(FanHandoff::new()));

    {
        let handoff = handoff.clone();
        let intro_watch = intro.clone();
        let spin_watch = spin.clone();
        dom::add_listener(&intro, "timeupdate", move |_ev| {
            let fired = handoff
                .borrow_mut()
                .check(intro_watch.current_time(), intro_watch.duration());
            if !fired {
                return;
            }
            log::info!("[fan] hand-off to loop clip");
            // Hide the intro without resetting its playhead: the swap
            // happens under an already-rendered frame, and a reset here
            // would flash frame zero through the fade.
            let _ = intro_watch.pause();
            let _ = intro_watch.class_list().remove_1(VISIBLE_CLASS);
            videos::play_ignoring_rejection(&spin_watch);
            let spin_show = spin_watch.clone();
            dom::on_next_frame(move || {
                // a service change can land in the one-frame gap and park
                // the pair; only reveal a clip that is still running
                if !spin_show.paused() {
                    let _ = spin_show.class_list().add_1(VISIBLE_CLASS);
                }
            });
        });
    }

    // Re-arm on every broadcast: activating the fan service starts a fresh
    // watch, and any other id arrives after the sequencer has already
    // paused, rewound, and hidden both clips.
    {
        let handoff = handoff.clone();
        dom::add_listener(window, SERVICE_CHANGE_EVENT, move |_ev| {
            handoff.borrow_mut().reset();
        });
    }
}

fn query_video(document: &web::Document, selector: &str) -> Option<web::HtmlVideoElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
}
