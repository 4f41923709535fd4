use crate::core::ScrollMetrics;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}, click handler skipped", element_id);
    }
}

/// Attach a page-lifetime listener to any event target.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn node_list_elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// All elements matching `selector`, in document order. An invalid selector
/// yields nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => node_list_elements(list),
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// Like [`query_all`] but scoped to `root`'s descendants.
pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(list),
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// Direct element children in document order.
pub fn children(el: &web::Element) -> Vec<web::Element> {
    let list = el.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Set one inline style property; non-HTML elements are left alone.
#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Run `f` once after `delay_ms`. The callback is owned by the JS timer, so
/// nothing leaks once it fires.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay)
    {
        log::warn!("[dom] setTimeout failed: {:?}", e);
    }
}

#[inline]
pub fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(f.as_ref().unchecked_ref());
    }
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current scroll offset and the heights that bound it.
pub fn scroll_metrics(window: &web::Window) -> ScrollMetrics {
    let document_height = window
        .document()
        .and_then(|d| d.body())
        .map(|b| b.scroll_height() as f64)
        .unwrap_or(0.0);
    ScrollMetrics {
        offset: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_height: viewport_height(window),
    }
}
