use crate::core::constants::KEY_SCROLL_STEP_PX;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Vertical scroll step for a navigation key, if it is one.
#[inline]
pub fn scroll_step_for_key(key: &str) -> Option<f64> {
    match key {
        "ArrowDown" => Some(KEY_SCROLL_STEP_PX),
        "ArrowUp" => Some(-KEY_SCROLL_STEP_PX),
        _ => None,
    }
}

pub fn wire_keyboard_scroll(document: &web::Document) {
    dom::add_listener(document, "keydown", move |ev: web::Event| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if let Some(dy) = scroll_step_for_key(&kev.key()) {
            if let Some(w) = web::window() {
                w.scroll_by_with_x_and_y(0.0, dy);
            }
        }
    });
}
