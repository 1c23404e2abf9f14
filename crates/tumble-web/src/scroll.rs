//! Smooth-scroll call-to-action.

use crate::dom;
use web_sys as web;

pub fn init(document: &web::Document) {
    let Some(cta) = document.get_element_by_id("cta") else {
        return;
    };
    let document = document.clone();
    dom::add_listener(&cta, "click", move |_ev| {
        if let Some(section) = document.get_element_by_id("contact-section") {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });
}
