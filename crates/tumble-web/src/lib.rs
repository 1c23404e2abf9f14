#![cfg(target_arch = "wasm32")]
//! Browser entry point for the Tumble site interactions.
//!
//! Each installer discovers its own markup and is independently
//! fail-silent, so one missing block never takes down the rest of the
//! page.

mod constants;
mod dom;
mod fan;
mod motion;
mod nav;
mod scroll;
mod tabs;
mod videos;

use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tumble-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    scroll::init(&document);
    nav::init(&window, &document);
    tabs::init(&document);
    videos::init(&window, &document);
    fan::init(&window, &document);
    motion::init(&window, &document);
    Ok(())
}

/// Activate a service tab by id, moving focus to its panel. Unknown ids
/// are ignored.
#[wasm_bindgen(js_name = activateService)]
pub fn activate_service(id: &str) {
    tabs::activate_service(id);
}

/// Service id of the currently selected tab, if it carries one.
#[wasm_bindgen(js_name = activeService)]
pub fn active_service() -> Option<String> {
    tabs::active_service()
}

/// Read-only readiness flag: true once every managed video has either
/// buffered its first frame or errored. Page scripts may poll this before
/// reacting to `serviceChange` broadcasts.
#[wasm_bindgen(js_name = mediaReady)]
pub fn media_ready() -> bool {
    videos::media_ready_flag()
}
