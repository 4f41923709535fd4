#![cfg(target_arch = "wasm32")]
use crate::coordinator::Coordinator;
use crate::core::MotionConfig;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod coordinator;
mod core;
mod decor;
mod dom;
mod events;
mod frame;
mod particles;
mod splash;
mod widgets;

/// Smoothly scroll the element with `section_id` to the top of the viewport.
/// Called from inline `onclick` handlers in the page markup.
#[wasm_bindgen]
pub fn scroll_to_section(section_id: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    match document.get_element_by_id(section_id) {
        Some(el) => {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        None => log::warn!("[nav] no section #{}", section_id),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-motion starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn wire_reveals(coordinator: &Rc<RefCell<Coordinator>>) -> anyhow::Result<()> {
    let (regions, visibility) = {
        let c = coordinator.borrow();
        (c.region_elements(), c.config.visibility)
    };
    let coordinator_for_events = coordinator.clone();
    events::visibility::observe(&regions, &visibility, move |ev| {
        coordinator_for_events.borrow_mut().on_visibility(ev);
    })?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced = dom::prefers_reduced_motion();
    let config = MotionConfig::for_motion_preference(reduced);
    if reduced {
        log::info!("[config] reduced motion requested");
    }

    // Cosmetic extras; a failure here must not stop the coordinator.
    if let Err(e) = splash::show_loading(&document) {
        log::warn!("[splash] {:?}", e);
    }
    if let Err(e) = particles::start(&document) {
        log::warn!("[particles] {:?}", e);
    }

    widgets::wire_mobile_menu(&document);
    widgets::wire_product_filter(&document);
    widgets::wire_accordion(&document);
    events::keyboard::wire_keyboard_scroll(&document);
    splash::wire_intro_reveal(&window, &document, config.intro_step_ms);
    decor::start_float_icons(&document);
    if let Err(e) = decor::start_logo_glitch(&document) {
        log::warn!("[glitch] {:?}", e);
    }
    if let Err(e) = decor::monitor_paint() {
        log::warn!("[paint] {:?}", e);
    }

    let coordinator = Rc::new(RefCell::new(Coordinator::enumerate(
        &document, &window, config,
    )));
    wire_reveals(&coordinator)?;
    events::scroll::wire_scroll(coordinator);

    log::info!("site-motion ready");
    Ok(())
}
