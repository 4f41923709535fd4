use crate::constants::{FLOAT_ICON_SELECTOR, GLITCH_ANIMATION, GLITCH_KEYFRAMES, LOGO_SELECTOR};
use crate::core::constants::{GLITCH_ACTIVE_MS, GLITCH_INTERVAL_MS};
use crate::core::{float_animation, paint_log_line};
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Start the out-of-phase bobbing on product, industry and feature icons.
pub fn start_float_icons(document: &web::Document) {
    let icons = dom::query_all(document, FLOAT_ICON_SELECTOR);
    for (i, icon) in icons.iter().enumerate() {
        dom::set_style(icon, "animation", &float_animation(i));
    }
    log::info!("[float] {} icons", icons.len());
}

fn glitch_once() {
    let Some(logo) = dom::window_document().and_then(|d| d.query_selector(LOGO_SELECTOR).ok().flatten())
    else {
        return;
    };
    dom::set_style(&logo, "animation", GLITCH_ANIMATION);
    dom::set_timeout(GLITCH_ACTIVE_MS, move || dom::set_style(&logo, "animation", ""));
}

/// Inject the glitch keyframes and replay them on the logo at a fixed interval.
pub fn start_logo_glitch(document: &web::Document) -> anyhow::Result<()> {
    let head = document.head().ok_or_else(|| anyhow!("no head"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow!("create style: {:?}", e))?;
    style.set_text_content(Some(GLITCH_KEYFRAMES));
    head.append_child(&style)
        .map_err(|e| anyhow!("append style: {:?}", e))?;

    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let tick = Closure::wrap(Box::new(glitch_once) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            GLITCH_INTERVAL_MS as i32,
        )
        .map_err(|e| anyhow!("setInterval: {:?}", e))?;
    tick.forget();
    Ok(())
}

/// Log first-paint timings to the console.
pub fn monitor_paint() -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        |list: web::PerformanceObserverEntryList, _observer: web::PerformanceObserver| {
            for entry in list.get_entries().iter() {
                let Ok(entry) = entry.dyn_into::<web::PerformanceEntry>() else {
                    continue;
                };
                if let Some(line) =
                    paint_log_line(&entry.entry_type(), &entry.name(), entry.start_time())
                {
                    log::info!("[paint] {}", line);
                }
            }
        },
    )
        as Box<dyn FnMut(web::PerformanceObserverEntryList, web::PerformanceObserver)>);

    let observer = web::PerformanceObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("PerformanceObserver: {:?}", e))?;
    let entry_types = js_sys::Array::of1(&JsValue::from_str("paint"));
    observer.observe(&web::PerformanceObserverInit::new(&entry_types));
    callback.forget();
    Ok(())
}
