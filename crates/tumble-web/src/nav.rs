//! Mobile navigation toggle with backdrop.

use crate::constants::NAV_BREAKPOINT_PX;
use crate::dom;
use std::rc::Rc;
use web_sys as web;

pub fn init(window: &web::Window, document: &web::Document) {
    let Ok(Some(toggle)) = document.query_selector(".nav-toggle") else {
        return;
    };
    let Ok(Some(links)) = document.query_selector(".nav-links") else {
        return;
    };

    // backdrop element is created once behind the open menu
    let Ok(backdrop) = document.create_element("div") else {
        return;
    };
    backdrop.set_class_name("nav-backdrop");
    if let Some(body) = document.body() {
        let _ = body.append_child(&backdrop);
    }

    let set_open: Rc<dyn Fn(bool)> = {
        let links = links.clone();
        let backdrop = backdrop.clone();
        let toggle = toggle.clone();
        Rc::new(move |open: bool| {
            if open {
                let _ = links.class_list().add_1("open");
                let _ = backdrop.class_list().add_1("open");
                let _ = toggle.set_attribute("aria-expanded", "true");
            } else {
                let _ = links.class_list().remove_1("open");
                let _ = backdrop.class_list().remove_1("open");
                let _ = toggle.set_attribute("aria-expanded", "false");
            }
        })
    };

    {
        let set_open = set_open.clone();
        let links = links.clone();
        dom::add_listener(&toggle, "click", move |_ev| {
            set_open(!links.class_list().contains("open"));
        });
    }
    // choosing any destination closes the drawer
    for link in dom::query_all(document, ".nav-links a") {
        let set_open = set_open.clone();
        dom::add_listener(&link, "click", move |_ev| set_open(false));
    }
    {
        let set_open = set_open.clone();
        dom::add_listener(&backdrop, "click", move |_ev| set_open(false));
    }
    // desktop layouts never show the drawer; close it when the viewport
    // grows past the breakpoint
    {
        let set_open = set_open.clone();
        let w = window.clone();
        dom::add_listener(window, "resize", move |_ev| {
            let wide = w
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .map(|px| px > NAV_BREAKPOINT_PX)
                .unwrap_or(false);
            if wide {
                set_open(false);
            }
        });
    }
}
