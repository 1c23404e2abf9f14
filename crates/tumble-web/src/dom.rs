use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a listener and leak the closure; handlers live for the page's
/// lifetime.
pub fn add_listener(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// Force a synchronous layout pass; reading offsetWidth flushes pending
/// style so a removed-then-re-added animation class restarts.
#[inline]
pub fn force_reflow(el: &web::HtmlElement) {
    let _ = el.offset_width();
}

/// Run `f` on the next rendering frame.
pub fn on_next_frame(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        let _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

/// Run `f` on the next event-loop turn (zero-delay timeout).
pub fn on_next_turn(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), 0);
    }
}
