use crate::constants::{
    ANIMATED_CLASS, ANIMATE_ON_SCROLL_CLASS, COUNTER_SELECTOR, COUNTER_TARGET_ATTR, NAVBAR_ID,
    REGION_ID_ATTR,
};
use crate::core::{
    parse_counter_target, stagger_animation, stagger_schedule, CounterAnimation, MotionConfig,
    RegionId, RegionKind, RevealDispatcher, RevealEffects, ScrollMetrics, ScrollSample,
    ScrollState, VisibilityEvent, REGION_TABLE,
};
use crate::dom;
use crate::events::scroll::{apply_sample, ScrollTargets};
use crate::frame;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::time::Duration;
use web_sys as web;

/// A tracked region and the elements its reveal touches.
pub struct RegionEntry {
    pub element: web::Element,
    pub kind: RegionKind,
    pub counters: SmallVec<[web::Element; 4]>,
}

/// Owns all shared presentation state for the page: the region lookup built at
/// start-up, reveal bookkeeping and the scroll state. Created once in `init`
/// and dropped with the page.
pub struct Coordinator {
    pub config: MotionConfig,
    regions: FnvHashMap<RegionId, RegionEntry>,
    dispatcher: RevealDispatcher,
    scroll: ScrollState,
    scroll_targets: ScrollTargets,
}

impl Coordinator {
    /// Enumerate the page's regions once and tag each with its id.
    pub fn enumerate(document: &web::Document, window: &web::Window, config: MotionConfig) -> Self {
        let mut regions = FnvHashMap::default();
        let mut dispatcher = RevealDispatcher::new(config.stagger_step_ms);
        let mut next_id = 0u32;

        for (selector, kind) in REGION_TABLE {
            for element in dom::query_all(document, selector) {
                if element.has_attribute(REGION_ID_ATTR) {
                    continue;
                }
                let id = RegionId(next_id);
                next_id += 1;
                _ = element.set_attribute(REGION_ID_ATTR, &id.0.to_string());
                _ = element.class_list().add_1(ANIMATE_ON_SCROLL_CLASS);
                let counters = match kind {
                    RegionKind::CounterGroup => {
                        dom::query_all_in(&element, COUNTER_SELECTOR).into_iter().collect()
                    }
                    _ => SmallVec::new(),
                };
                dispatcher.register(id, *kind);
                regions.insert(
                    id,
                    RegionEntry {
                        element,
                        kind: *kind,
                        counters,
                    },
                );
            }
        }
        log::info!("[reveal] enumerated {} regions", dispatcher.region_count());

        let mut scroll = ScrollState::new(window.scroll_y().unwrap_or(0.0));
        scroll.threshold_px = config.nav_threshold_px;
        scroll.parallax_speed = config.parallax_speed;

        Self {
            config,
            regions,
            dispatcher,
            scroll,
            scroll_targets: ScrollTargets::collect(document, NAVBAR_ID),
        }
    }

    /// Region elements with their ids, ordered by id.
    pub fn region_elements(&self) -> Vec<(RegionId, web::Element)> {
        let mut out: Vec<_> = self
            .regions
            .iter()
            .map(|(id, entry)| (*id, entry.element.clone()))
            .collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }

    /// Reveal handler for the visibility stream.
    pub fn on_visibility(&mut self, event: VisibilityEvent) -> bool {
        let mut effects = DomEffects {
            regions: &self.regions,
            counter_duration: self.config.counter_duration,
            stagger_step_ms: self.dispatcher.stagger_step_ms,
        };
        let revealed = self.dispatcher.dispatch(event, &mut effects);
        if let (true, Some(entry)) = (revealed, self.regions.get(&event.region)) {
            log::info!("[reveal] region {} ({:?}) revealed", event.region, entry.kind);
        }
        revealed
    }

    /// Scroll handler: one state update, then every consumer reads the same sample.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> ScrollSample {
        let sample = self.scroll.sample(metrics);
        apply_sample(&self.scroll_targets, &sample);
        sample
    }
}

/// Applies reveal effects to the live document.
struct DomEffects<'a> {
    regions: &'a FnvHashMap<RegionId, RegionEntry>,
    counter_duration: Duration,
    stagger_step_ms: u32,
}

impl RevealEffects for DomEffects<'_> {
    fn mark_animated(&mut self, region: RegionId) {
        if let Some(entry) = self.regions.get(&region) {
            dom::set_class(&entry.element, ANIMATED_CLASS, true);
        }
    }

    fn start_counters(&mut self, region: RegionId) {
        let Some(entry) = self.regions.get(&region) else {
            return;
        };
        for counter in &entry.counters {
            let target = counter
                .get_attribute(COUNTER_TARGET_ATTR)
                .as_deref()
                .and_then(parse_counter_target);
            match target {
                Some(target) => frame::animate_counter(
                    counter.clone(),
                    CounterAnimation::new(target, self.counter_duration),
                ),
                None => log::warn!("[reveal] counter in region {} has no usable target", region),
            }
        }
    }

    fn stagger_children(&mut self, region: RegionId) {
        let Some(entry) = self.regions.get(&region) else {
            return;
        };
        let step = self.stagger_step_ms;
        let children = dom::children(&entry.element);
        let schedule = stagger_schedule(children.len(), step);
        for (i, (child, delay_ms)) in children.into_iter().zip(schedule).enumerate() {
            let animation = stagger_animation(i, step);
            dom::set_timeout(delay_ms, move || {
                if child.is_connected() {
                    dom::set_style(&child, "animation", &animation);
                }
            });
        }
    }
}
