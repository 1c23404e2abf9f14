//! Media sequencer wiring: asset readiness gating plus `serviceChange`
//! reduction onto the showcase videos.
//!
//! All playback state lives in [`Sequencer`]; this module only discovers
//! the video elements, observes their load outcomes, and executes the
//! command batches the reducer hands back.

use crate::constants::{CLIP_SELECTOR, IDLE_VIDEO_ID, SERVICE_CHANGE_EVENT, VISIBLE_CLASS};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tumble_core::{ClipBinding, MediaCommand, ReadinessGate, Rewind, Sequencer};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

thread_local! {
    /// Process-wide readiness flag; page scripts read it via `mediaReady()`.
    static MEDIA_READY: Cell<bool> = const { Cell::new(false) };
}

pub fn media_ready_flag() -> bool {
    MEDIA_READY.with(|flag| flag.get())
}

struct ShowcaseDom {
    clips: Vec<web::HtmlVideoElement>,
    idle: web::HtmlVideoElement,
    sequencer: RefCell<Sequencer>,
}

pub fn init(window: &web::Window, document: &web::Document) {
    let clips: Vec<web::HtmlVideoElement> = dom::query_all(document, CLIP_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
        .collect();
    let Some(idle) = document
        .get_element_by_id(IDLE_VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
    else {
        log::warn!("[media] no idle video; showcase disabled");
        return;
    };

    let bindings: Vec<ClipBinding> = clips
        .iter()
        .map(|v| ClipBinding {
            service: v.get_attribute("data-service").unwrap_or_default(),
        })
        .collect();

    let showcase = Rc::new(ShowcaseDom {
        clips,
        idle,
        sequencer: RefCell::new(Sequencer::new(bindings)),
    });

    wire_readiness(&showcase);

    let sc = showcase.clone();
    dom::add_listener(window, SERVICE_CHANGE_EVENT, move |ev| {
        let id = service_change_id(&ev);
        let batch = sc.sequencer.borrow_mut().on_service_change(id.as_deref());
        run_batch(&sc, &batch);
    });
}

/// One latch per video: `loadeddata` and `error` each fire at most once,
/// but a broken source can emit both and must settle the gate only once.
fn wire_readiness(showcase: &Rc<ShowcaseDom>) {
    let mut videos: Vec<web::HtmlVideoElement> = showcase.clips.clone();
    videos.push(showcase.idle.clone());
    let gate = Rc::new(RefCell::new(ReadinessGate::new(videos.len())));

    for video in videos {
        let latch = Rc::new(Cell::new(false));
        if video.ready_state() >= web::HtmlMediaElement::HAVE_CURRENT_DATA {
            // already buffered at observation time counts immediately
            settle_once(&gate, showcase, &latch);
            continue;
        }
        for kind in ["loadeddata", "error"] {
            let gate = gate.clone();
            let showcase = showcase.clone();
            let latch = latch.clone();
            dom::add_listener(&video, kind, move |_ev| {
                settle_once(&gate, &showcase, &latch);
            });
        }
    }
}

fn settle_once(gate: &Rc<RefCell<ReadinessGate>>, showcase: &Rc<ShowcaseDom>, latch: &Cell<bool>) {
    if latch.replace(true) {
        return;
    }
    if gate.borrow_mut().settle() {
        MEDIA_READY.with(|flag| flag.set(true));
        // the flip itself drives the first transition, so the showcase
        // starts on the idle video without waiting for user input
        let batch = showcase.sequencer.borrow_mut().mark_ready();
        run_batch(showcase, &batch);
    }
}

/// Pull `detail.id` out of the broadcast; null and absent both mean "no
/// service".
fn service_change_id(ev: &web::Event) -> Option<String> {
    let custom: &web::CustomEvent = ev.dyn_ref()?;
    let detail = custom.detail();
    js_sys::Reflect::get(&detail, &JsValue::from_str("id"))
        .ok()?
        .as_string()
}

fn run_batch(showcase: &ShowcaseDom, batch: &[MediaCommand]) {
    for cmd in batch {
        match cmd {
            MediaCommand::HideClip { clip, rewind } => {
                if let Some(video) = showcase.clips.get(*clip) {
                    hide_clip(video, *rewind);
                }
            }
            MediaCommand::ParkIdle => {
                let _ = showcase.idle.pause();
                let _ = showcase.idle.class_list().remove_1(VISIBLE_CLASS);
            }
            MediaCommand::ShowIdle => reveal(&showcase.idle),
            MediaCommand::ShowClip { clip } => {
                if let Some(video) = showcase.clips.get(*clip) {
                    reveal(video);
                }
            }
        }
    }
}

fn hide_clip(video: &web::HtmlVideoElement, rewind: Rewind) {
    let _ = video.pause();
    let _ = video.class_list().remove_1(VISIBLE_CLASS);
    match rewind {
        Rewind::Now => video.set_current_time(0.0),
        Rewind::Deferred => {
            let video = video.clone();
            dom::on_next_turn(move || video.set_current_time(0.0));
        }
    }
}

/// Rewind, mark visible, then start playback.
fn reveal(video: &web::HtmlVideoElement) {
    video.set_current_time(0.0);
    let _ = video.class_list().add_1(VISIBLE_CLASS);
    play_ignoring_rejection(video);
}

/// Start playback and drop the outcome; autoplay denial must not disturb
/// the visibility state already applied.
pub(crate) fn play_ignoring_rejection(video: &web::HtmlVideoElement) {
    if let Ok(promise) = video.play() {
        spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
    }
}
