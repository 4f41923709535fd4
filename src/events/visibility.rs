use crate::constants::REGION_ID_ATTR;
use crate::core::{RegionId, VisibilityConfig, VisibilityEvent};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn entry_event(entry: JsValue) -> Option<VisibilityEvent> {
    let entry = entry.dyn_into::<web::IntersectionObserverEntry>().ok()?;
    let raw = entry.target().get_attribute(REGION_ID_ATTR)?;
    let region = RegionId::parse(&raw)?;
    Some(VisibilityEvent {
        region,
        visible: entry.is_intersecting(),
    })
}

/// Watch `regions` and feed every visibility transition to `on_event`, in the
/// order the browser delivers them. The observer lives for the page lifetime.
pub fn observe(
    regions: &[(RegionId, web::Element)],
    config: &VisibilityConfig,
    mut on_event: impl FnMut(VisibilityEvent) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                match entry_event(entry) {
                    Some(ev) => on_event(ev),
                    None => log::warn!("[visibility] entry without a region id skipped"),
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin());
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for (_, el) in regions {
        observer.observe(el);
    }
    log::info!(
        "[visibility] observing {} regions (threshold={}, margin={})",
        regions.len(),
        config.threshold,
        config.root_margin()
    );
    Ok(observer)
}
