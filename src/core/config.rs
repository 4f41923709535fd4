use super::constants::{
    COUNTER_DURATION_MS, INTRO_STEP_MS, NAV_SCROLL_THRESHOLD_PX, PARALLAX_SPEED, STAGGER_STEP_MS,
};
use super::visibility::VisibilityConfig;
use std::time::Duration;

/// All motion tunables in one place, resolved once at start-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub visibility: VisibilityConfig,
    pub nav_threshold_px: f64,
    pub counter_duration: Duration,
    pub stagger_step_ms: u32,
    pub intro_step_ms: u32,
    pub parallax_speed: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            visibility: VisibilityConfig::default(),
            nav_threshold_px: NAV_SCROLL_THRESHOLD_PX,
            counter_duration: Duration::from_millis(COUNTER_DURATION_MS),
            stagger_step_ms: STAGGER_STEP_MS,
            intro_step_ms: INTRO_STEP_MS,
            parallax_speed: PARALLAX_SPEED,
        }
    }
}

impl MotionConfig {
    /// Variant for `prefers-reduced-motion`: counters land immediately,
    /// cascades collapse and parallax is off. Thresholds are unchanged.
    pub fn reduced() -> Self {
        Self {
            counter_duration: Duration::ZERO,
            stagger_step_ms: 0,
            intro_step_ms: 0,
            parallax_speed: 0.0,
            ..Self::default()
        }
    }

    pub fn for_motion_preference(prefers_reduced: bool) -> Self {
        if prefers_reduced {
            Self::reduced()
        } else {
            Self::default()
        }
    }
}
