use crate::constants::{
    HIDDEN_CLASS, INTRO_HIDDEN_OPACITY, INTRO_HIDDEN_TRANSFORM, INTRO_SELECTOR, INTRO_TRANSITION,
    LOADER_CLASS, SPLASH_CLASS,
};
use crate::core::constants::INTRO_DELAY_MS;
use crate::core::{intro_start_for, splash_timeline, stagger_delay_ms, IntroStart, SplashStep};
use crate::dom;
use anyhow::anyhow;
use web_sys as web;

/// Show the loading overlay and schedule its fade-out and removal.
pub fn show_loading(document: &web::Document) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let splash = document
        .create_element("div")
        .map_err(|e| anyhow!("create splash: {:?}", e))?;
    splash.set_class_name(SPLASH_CLASS);
    splash.set_inner_html(&format!("<div class=\"{}\"></div>", LOADER_CLASS));
    body.append_child(&splash)
        .map_err(|e| anyhow!("append splash: {:?}", e))?;

    for (delay_ms, step) in splash_timeline() {
        let splash = splash.clone();
        dom::set_timeout(delay_ms, move || match step {
            SplashStep::Hide => dom::set_class(&splash, HIDDEN_CLASS, true),
            SplashStep::Remove => {
                splash.remove();
                log::info!("[splash] removed");
            }
        });
    }
    Ok(())
}

/// Hide headline/body copy and cards, then bring them back one after another.
fn intro_reveal(document: &web::Document, step_ms: u32) {
    let elements = dom::query_all(document, INTRO_SELECTOR);
    log::info!("[intro] revealing {} elements", elements.len());
    for (i, el) in elements.into_iter().enumerate() {
        dom::set_style(&el, "opacity", INTRO_HIDDEN_OPACITY);
        dom::set_style(&el, "transform", INTRO_HIDDEN_TRANSFORM);
        dom::set_style(&el, "transition", INTRO_TRANSITION);
        dom::set_timeout(stagger_delay_ms(i, step_ms), move || {
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "transform", "translateY(0)");
        });
    }
}

fn schedule_intro(step_ms: u32) {
    dom::set_timeout(INTRO_DELAY_MS, move || {
        if let Some(document) = dom::window_document() {
            intro_reveal(&document, step_ms);
        }
    });
}

/// Run the intro cascade a little after the window finishes loading. If the
/// page already loaded before this module started, the delay starts now.
pub fn wire_intro_reveal(window: &web::Window, document: &web::Document, step_ms: u32) {
    match intro_start_for(&document.ready_state()) {
        IntroStart::Immediately => schedule_intro(step_ms),
        IntroStart::OnLoad => {
            dom::add_listener(window, "load", move |_ev: web::Event| schedule_intro(step_ms));
        }
    }
}
