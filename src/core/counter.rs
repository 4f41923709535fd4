use super::constants::COUNTER_DURATION_MS;
use std::time::Duration;

/// Quartic ease-out: fast start, gentle landing.
#[inline]
pub fn ease_out_quart(progress: f64) -> f64 {
    let inv = 1.0 - progress.clamp(0.0, 1.0);
    1.0 - inv * inv * inv * inv
}

/// Parse a counter target the way the page markup writes it (`data-target="250"`).
///
/// Leading whitespace is skipped and the leading run of decimal digits is used,
/// so `"250+"` yields 250. Anything without leading digits (including negative
/// numbers) is rejected.
pub fn parse_counter_target(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = trimmed
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..digits_len].parse().ok()
}

/// Time-based count-up from 0 to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub target: u64,
    pub duration: Duration,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    pub fn with_default_duration(target: u64) -> Self {
        Self::new(target, Duration::from_millis(COUNTER_DURATION_MS))
    }

    /// Linear progress in [0, 1]. A zero duration is already complete.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed value after `elapsed`; exactly `target` once progress hits 1.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.target;
        }
        (self.target as f64 * ease_out_quart(progress)).round() as u64
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }
}
