use super::constants::{NAV_SCROLL_THRESHOLD_PX, PARALLAX_SPEED};

/// Raw measurements taken from the window on one scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Everything the scroll consumers need from a single sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    /// Navbar carries the `scrolled` class.
    pub scrolled: bool,
    /// Navbar is slid off-screen.
    pub hidden: bool,
    /// Page progress in [0, 100].
    pub progress_pct: f64,
    /// Vertical translation for parallax layers.
    pub parallax_px: f64,
}

/// Percentage of the scrollable range already scrolled.
///
/// Pages shorter than (or equal to) the viewport have nothing to scroll and
/// report 0. Overscroll is clamped.
pub fn scroll_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if !(range > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    (offset / range * 100.0).clamp(0.0, 100.0)
}

/// Last-known scroll offset plus the tuning that derives navbar and progress state.
#[derive(Clone, Copy, Debug)]
pub struct ScrollState {
    last_offset: f64,
    pub threshold_px: f64,
    pub parallax_speed: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScrollState {
    pub fn new(initial_offset: f64) -> Self {
        Self {
            last_offset: initial_offset,
            threshold_px: NAV_SCROLL_THRESHOLD_PX,
            parallax_speed: PARALLAX_SPEED,
        }
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Fold one scroll sample into the state and derive the presentation values.
    ///
    /// The bar hides on a downward move that starts past the threshold; moving
    /// up or being inside the top band always shows it. The sample that first
    /// crosses the threshold only adds the scrolled style, even for a single
    /// jump from the top (0 -> 500), so the bar hides one sample later than a
    /// plain "moving down and past the threshold" rule would.
    pub fn sample(&mut self, metrics: ScrollMetrics) -> ScrollSample {
        let offset = metrics.offset;
        let previous = self.last_offset;
        let scrolled = offset > self.threshold_px;
        let hidden = offset > previous && scrolled && previous > self.threshold_px;
        self.last_offset = offset;
        ScrollSample {
            offset,
            scrolled,
            hidden,
            progress_pct: scroll_progress(offset, metrics.document_height, metrics.viewport_height),
            parallax_px: offset * self.parallax_speed,
        }
    }
}

/// Inline transform for the navbar.
#[inline]
pub fn navbar_transform(hidden: bool) -> &'static str {
    if hidden {
        "translateY(-100%)"
    } else {
        "translateY(0)"
    }
}
