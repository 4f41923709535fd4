// Host-side tests for the reveal dispatcher.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod visibility {
    include!("../src/core/visibility.rs");
}
mod counter {
    include!("../src/core/counter.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}

use counter::*;
use reveal::*;
use std::collections::HashMap;
use std::time::Duration;
use visibility::*;

/// Stand-in for the page: counters and child counts per region, and a log of
/// every effect the dispatcher asked for.
#[derive(Default)]
struct RecordingEffects {
    counter_targets: HashMap<RegionId, Vec<&'static str>>,
    child_counts: HashMap<RegionId, usize>,
    animated: Vec<RegionId>,
    started: Vec<(RegionId, CounterAnimation)>,
    scheduled: Vec<(RegionId, usize, u32)>,
    step_ms: u32,
}

impl RevealEffects for RecordingEffects {
    fn mark_animated(&mut self, region: RegionId) {
        self.animated.push(region);
    }

    fn start_counters(&mut self, region: RegionId) {
        let targets = self.counter_targets.get(&region).cloned().unwrap_or_default();
        for raw in targets {
            if let Some(t) = parse_counter_target(raw) {
                self.started
                    .push((region, CounterAnimation::with_default_duration(t)));
            }
        }
    }

    fn stagger_children(&mut self, region: RegionId) {
        let n = self.child_counts.get(&region).copied().unwrap_or(0);
        for (i, delay) in stagger_schedule(n, self.step_ms).enumerate() {
            self.scheduled.push((region, i, delay));
        }
    }
}

const STATS: RegionId = RegionId(0);
const PRODUCTS: RegionId = RegionId(1);
const ABOUT: RegionId = RegionId(2);

fn setup() -> (RevealDispatcher, RecordingEffects) {
    let mut d = RevealDispatcher::with_default_step();
    d.register(STATS, RegionKind::CounterGroup);
    d.register(PRODUCTS, RegionKind::StaggeredGroup);
    d.register(ABOUT, RegionKind::Plain);
    let mut fx = RecordingEffects {
        step_ms: d.stagger_step_ms,
        ..Default::default()
    };
    fx.counter_targets.insert(STATS, vec!["250", "15", "oops"]);
    fx.child_counts.insert(PRODUCTS, 4);
    (d, fx)
}

fn visible(region: RegionId) -> VisibilityEvent {
    VisibilityEvent {
        region,
        visible: true,
    }
}

#[test]
fn stats_scenario_counts_to_250_once() {
    let mut d = RevealDispatcher::with_default_step();
    d.register(STATS, RegionKind::CounterGroup);
    let mut fx = RecordingEffects::default();
    fx.counter_targets.insert(STATS, vec!["250"]);

    assert!(d.dispatch(visible(STATS), &mut fx));
    assert_eq!(fx.started.len(), 1);
    let (_, anim) = fx.started[0];
    assert_eq!(anim.value_at(Duration::ZERO), 0);
    assert_eq!(anim.value_at(Duration::from_millis(2000)), 250);
    assert_eq!(anim.value_at(Duration::from_millis(2600)).to_string(), "250");

    assert!(!d.dispatch(visible(STATS), &mut fx));
    assert_eq!(fx.started.len(), 1);
}

#[test]
fn counter_group_starts_each_valid_counter_once() {
    let (mut d, mut fx) = setup();
    d.dispatch(visible(STATS), &mut fx);
    d.dispatch(visible(STATS), &mut fx);
    let targets: Vec<u64> = fx.started.iter().map(|(_, a)| a.target).collect();
    assert_eq!(targets, vec![250, 15]);
}

#[test]
fn repeat_reveal_is_a_no_op() {
    let (mut d, mut fx) = setup();
    for region in [STATS, PRODUCTS, ABOUT] {
        assert!(d.dispatch(visible(region), &mut fx));
    }
    let animated = fx.animated.clone();
    let started = fx.started.len();
    let scheduled = fx.scheduled.clone();

    // scroll away and back again
    for region in [STATS, PRODUCTS, ABOUT] {
        let hidden = VisibilityEvent {
            region,
            visible: false,
        };
        assert!(!d.dispatch(hidden, &mut fx));
        assert!(!d.dispatch(visible(region), &mut fx));
    }
    assert_eq!(fx.animated, animated);
    assert_eq!(fx.started.len(), started);
    assert_eq!(fx.scheduled, scheduled);
}

#[test]
fn not_visible_events_do_not_reveal() {
    let (mut d, mut fx) = setup();
    let ev = VisibilityEvent {
        region: PRODUCTS,
        visible: false,
    };
    assert!(!d.dispatch(ev, &mut fx));
    assert!(!d.is_revealed(PRODUCTS));
    assert!(fx.animated.is_empty());
    // a later visible event still reveals
    assert!(d.dispatch(visible(PRODUCTS), &mut fx));
    assert!(d.is_revealed(PRODUCTS));
}

#[test]
fn unknown_region_is_ignored() {
    let (mut d, mut fx) = setup();
    assert!(!d.dispatch(visible(RegionId(99)), &mut fx));
    assert!(fx.animated.is_empty());
}

#[test]
fn plain_region_only_gets_animated_tag() {
    let (mut d, mut fx) = setup();
    d.dispatch(visible(ABOUT), &mut fx);
    assert_eq!(fx.animated, vec![ABOUT]);
    assert!(fx.started.is_empty());
    assert!(fx.scheduled.is_empty());
}

#[test]
fn staggered_children_cascade_in_document_order() {
    let (mut d, mut fx) = setup();
    d.dispatch(visible(PRODUCTS), &mut fx);
    assert_eq!(fx.animated, vec![PRODUCTS]);
    let delays: Vec<u32> = fx.scheduled.iter().map(|(_, _, d)| *d).collect();
    assert_eq!(delays, vec![0, 100, 200, 300]);
    assert!(delays.windows(2).all(|w| w[0] < w[1]));
    let indices: Vec<usize> = fx.scheduled.iter().map(|(_, i, _)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn stagger_animation_values() {
    assert_eq!(stagger_animation(0, 100), "slideInUp 0.6s ease-out 0s both");
    assert_eq!(stagger_animation(3, 100), "slideInUp 0.6s ease-out 0.3s both");
    assert_eq!(stagger_delay_ms(5, 0), 0);
}

#[test]
fn region_table_kinds() {
    let kind_of = |sel: &str| {
        REGION_TABLE
            .iter()
            .find(|(s, _)| *s == sel)
            .map(|(_, k)| *k)
    };
    assert_eq!(kind_of(".hero-stats"), Some(RegionKind::CounterGroup));
    assert_eq!(kind_of(".features-grid"), Some(RegionKind::StaggeredGroup));
    assert_eq!(kind_of(".section-header"), Some(RegionKind::Plain));
    assert_eq!(REGION_TABLE.len(), 6);
}

#[test]
fn region_id_round_trips_through_attribute() {
    assert_eq!(RegionId::parse("12"), Some(RegionId(12)));
    assert_eq!(RegionId::parse(" 3 "), Some(RegionId(3)));
    assert_eq!(RegionId::parse("x"), None);
    assert_eq!(RegionId(7).to_string(), "#7");
}

#[test]
fn visibility_defaults_and_root_margin() {
    let cfg = VisibilityConfig::default();
    assert_eq!(cfg.threshold, 0.1);
    assert_eq!(cfg.root_margin(), "0px 0px -50px 0px");
    let flush = VisibilityConfig {
        bottom_margin_px: 0,
        ..cfg
    };
    assert_eq!(flush.root_margin(), "0px 0px 0px 0px");
}
