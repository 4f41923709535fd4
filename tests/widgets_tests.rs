// Host-side tests for the page widgets' pure logic: filter, accordion,
// splash timeline, particles and motion config.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod visibility {
    include!("../src/core/visibility.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod filter {
    include!("../src/core/filter.rs");
}
mod accordion {
    include!("../src/core/accordion.rs");
}
mod splash {
    include!("../src/core/splash.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod decor {
    include!("../src/core/decor.rs");
}

use accordion::*;
use config::*;
use decor::*;
use filter::*;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use splash::*;
use std::time::Duration;

#[test]
fn filter_all_shows_every_card() {
    assert!(card_matches(Some("all"), Some("motors")));
    assert!(card_matches(Some("all"), None));
}

#[test]
fn button_without_filter_shows_only_uncategorised_cards() {
    let shown = partition_cards(None, [Some("pumps"), None, Some("all")]);
    assert_eq!(shown, vec![false, true, false]);
}

#[test]
fn filter_category_matches_exactly() {
    let shown = partition_cards(
        Some("motors"),
        [Some("motors"), Some("pumps"), None, Some("Motors")],
    );
    assert_eq!(shown, vec![true, false, false, false]);
}

#[test]
fn accordion_opens_one_item_at_a_time() {
    let mut acc = AccordionState::default();
    assert_eq!(acc.open_item(), None);
    assert_eq!(acc.toggle(1), Some(1));
    assert_eq!(acc.toggle(2), Some(2));
    assert!(!acc.is_open(1));
    assert!(acc.is_open(2));
}

#[test]
fn accordion_clicking_open_item_closes_it() {
    let mut acc = AccordionState::with_open(Some(0));
    assert_eq!(acc.toggle(0), None);
    assert_eq!(acc.open_item(), None);
    assert_eq!(acc.toggle(0), Some(0));
}

#[test]
fn splash_hides_then_removes() {
    let steps = splash_timeline();
    assert_eq!(steps[0], (1500, SplashStep::Hide));
    assert_eq!(steps[1], (2000, SplashStep::Remove));
}

#[test]
fn intro_starts_now_when_page_already_loaded() {
    assert_eq!(intro_start_for("complete"), IntroStart::Immediately);
}

#[test]
fn intro_waits_for_load_while_page_is_loading() {
    assert_eq!(intro_start_for("loading"), IntroStart::OnLoad);
    assert_eq!(intro_start_for("interactive"), IntroStart::OnLoad);
}

#[test]
fn float_icons_are_staggered_half_a_second_apart() {
    assert_eq!(float_animation(0), "float 3s ease-in-out infinite 0s");
    assert_eq!(float_animation(1), "float 3s ease-in-out infinite 0.5s");
    assert_eq!(float_animation(3), "float 3s ease-in-out infinite 1.5s");
}

#[test]
fn only_paint_entries_are_logged() {
    assert_eq!(
        paint_log_line("paint", "first-contentful-paint", 412.5),
        Some("first-contentful-paint: 412.5ms".to_string())
    );
    assert_eq!(paint_log_line("mark", "boot", 3.0), None);
}

#[test]
fn particle_styles_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let p = ParticleStyle::random(&mut rng);
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.0..100.0).contains(&p.top_pct));
        assert!((0.0..6.0).contains(&p.delay_secs));
        assert!((3.0..=6.0).contains(&p.duration_secs));
        assert!((0.2..=0.7).contains(&p.opacity));
        assert!((0.0..100.0).contains(&respawn_left_pct(&mut rng)));
    }
}

#[test]
fn particle_css_text_lists_every_property() {
    let p = ParticleStyle {
        left_pct: 12.5,
        top_pct: 80.0,
        delay_secs: 1.25,
        duration_secs: 4.0,
        opacity: 0.5,
    };
    assert_eq!(
        p.css_text(),
        "left:12.500%;top:80.000%;animation-delay:1.250s;animation-duration:4.000s;opacity:0.500"
    );
}

#[test]
fn particles_respawn_only_below_viewport() {
    assert!(needs_respawn(901.0, 900.0));
    assert!(!needs_respawn(900.0, 900.0));
    assert!(!needs_respawn(-10.0, 900.0));
}

#[test]
fn default_motion_config_matches_page_timings() {
    let cfg = MotionConfig::default();
    assert_eq!(cfg.counter_duration, Duration::from_millis(2000));
    assert_eq!(cfg.stagger_step_ms, 100);
    assert_eq!(cfg.intro_step_ms, 50);
    assert_eq!(cfg.nav_threshold_px, 100.0);
    assert_eq!(cfg.parallax_speed, 0.5);
    assert_eq!(cfg.visibility.bottom_margin_px, 50);
}

#[test]
fn reduced_motion_collapses_animation_but_keeps_thresholds() {
    let cfg = MotionConfig::for_motion_preference(true);
    assert_eq!(cfg, MotionConfig::reduced());
    assert_eq!(cfg.counter_duration, Duration::ZERO);
    assert_eq!(cfg.stagger_step_ms, 0);
    assert_eq!(cfg.parallax_speed, 0.0);
    assert_eq!(cfg.nav_threshold_px, MotionConfig::default().nav_threshold_px);
    assert_eq!(cfg.visibility, MotionConfig::default().visibility);
    assert_eq!(MotionConfig::for_motion_preference(false), MotionConfig::default());
}
