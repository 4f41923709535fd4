use super::constants::{FLOAT_DURATION_SECS, FLOAT_STEP_SECS};

/// Inline `animation` for the `index`-th floating icon; icons bob out of phase.
pub fn float_animation(index: usize) -> String {
    format!(
        "float {}s ease-in-out infinite {}s",
        FLOAT_DURATION_SECS,
        index as f64 * FLOAT_STEP_SECS
    )
}

/// Console line for a paint-timing entry; other entry types are not logged.
pub fn paint_log_line(entry_type: &str, name: &str, start_ms: f64) -> Option<String> {
    (entry_type == "paint").then(|| format!("{}: {}ms", name, start_ms))
}
