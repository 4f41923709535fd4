use crate::constants::{PARALLAX_SELECTOR, PROGRESS_BAR_STYLE, SCROLLED_CLASS};
use crate::coordinator::Coordinator;
use crate::core::{navbar_transform, ScrollSample};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Elements the scroll tracker writes to. Any of them may be absent.
pub struct ScrollTargets {
    pub navbar: Option<web::Element>,
    pub progress_bar: Option<web::Element>,
    pub parallax: Vec<web::Element>,
}

impl ScrollTargets {
    pub fn collect(document: &web::Document, navbar_id: &str) -> Self {
        let navbar = document.get_element_by_id(navbar_id);
        if navbar.is_none() {
            log::warn!("[scroll] missing #{}, navbar effects disabled", navbar_id);
        }
        Self {
            navbar,
            progress_bar: create_progress_bar(document),
            parallax: dom::query_all(document, PARALLAX_SELECTOR),
        }
    }
}

fn create_progress_bar(document: &web::Document) -> Option<web::Element> {
    let body = document.body()?;
    let bar = document.create_element("div").ok()?;
    _ = bar.set_attribute("style", PROGRESS_BAR_STYLE);
    body.append_child(&bar).ok()?;
    Some(bar)
}

/// Write one sample to the navbar, progress bar and parallax layers.
pub fn apply_sample(targets: &ScrollTargets, sample: &ScrollSample) {
    if let Some(nav) = &targets.navbar {
        dom::set_class(nav, SCROLLED_CLASS, sample.scrolled);
        dom::set_style(nav, "transform", navbar_transform(sample.hidden));
    }
    if let Some(bar) = &targets.progress_bar {
        dom::set_style(bar, "width", &format!("{}%", sample.progress_pct));
    }
    if !targets.parallax.is_empty() {
        let transform = format!("translateY({}px)", sample.parallax_px);
        for el in &targets.parallax {
            dom::set_style(el, "transform", &transform);
        }
    }
}

/// Feed every window scroll event through the coordinator.
pub fn wire_scroll(coordinator: Rc<RefCell<Coordinator>>) {
    let Some(window) = web::window() else {
        return;
    };
    let window_for_sample = window.clone();
    dom::add_listener(&window, "scroll", move |_ev: web::Event| {
        let metrics = dom::scroll_metrics(&window_for_sample);
        coordinator.borrow_mut().on_scroll(metrics);
    });
}
