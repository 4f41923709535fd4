use super::constants::{
    PARTICLE_DELAY_MAX_SECS, PARTICLE_DURATION_MIN_SECS, PARTICLE_DURATION_SPAN_SECS,
    PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_SPAN,
};
use rand::Rng;

/// Randomised placement and timing for one background particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleStyle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
    pub opacity: f64,
}

impl ParticleStyle {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            delay_secs: rng.gen_range(0.0..PARTICLE_DELAY_MAX_SECS),
            duration_secs: PARTICLE_DURATION_MIN_SECS
                + rng.gen_range(0.0..PARTICLE_DURATION_SPAN_SECS),
            opacity: PARTICLE_OPACITY_MIN + rng.gen_range(0.0..PARTICLE_OPACITY_SPAN),
        }
    }

    /// Inline style declaration for the particle element.
    pub fn css_text(&self) -> String {
        format!(
            "left:{:.3}%;top:{:.3}%;animation-delay:{:.3}s;animation-duration:{:.3}s;opacity:{:.3}",
            self.left_pct, self.top_pct, self.delay_secs, self.duration_secs, self.opacity
        )
    }
}

/// A particle that drifted below the viewport goes back to the top.
#[inline]
pub fn needs_respawn(particle_top_px: f64, viewport_height: f64) -> bool {
    particle_top_px > viewport_height
}

/// Fresh horizontal position for a respawned particle.
pub fn respawn_left_pct(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.0..100.0)
}
