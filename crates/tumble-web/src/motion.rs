//! Visibility-aware community badge animation.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const ANIMATED_CLASS: &str = "is-animated";
const VISIBILITY_RATIO: f64 = 0.25;

pub fn init(window: &web::Window, document: &web::Document) {
    let Ok(Some(img)) = document.query_selector(".discord-img") else {
        return;
    };

    if prefers_reduced_motion(window) {
        let _ = img.class_list().remove_1(ANIMATED_CLASS);
        return;
    }

    let target = img.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: JsValue| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() && entry.intersection_ratio() > VISIBILITY_RATIO {
                    let _ = target.class_list().add_1(ANIMATED_CLASS);
                } else {
                    let _ = target.class_list().remove_1(ANIMATED_CLASS);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let thresholds = js_sys::Array::of4(&0.0.into(), &0.25.into(), &0.5.into(), &1.0.into());
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&thresholds);
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&img);
            callback.forget();
        }
        Err(_) => {
            // no observer support: animate unconditionally
            let _ = img.class_list().add_1(ANIMATED_CLASS);
        }
    }
}

fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}
