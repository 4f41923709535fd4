use super::constants::{VISIBILITY_BOTTOM_MARGIN_PX, VISIBILITY_THRESHOLD};

/// Stable identity of a tracked page region (its enumeration index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

impl RegionId {
    /// Parse the `data-region-id` attribute written at enumeration time.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(RegionId)
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One visibility transition reported by the intersection primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityEvent {
    pub region: RegionId,
    pub visible: bool,
}

/// Observer tuning: how much of a region must show, and how far the viewport's
/// bottom edge is pulled in so regions trigger a little before fully in view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityConfig {
    pub threshold: f64,
    pub bottom_margin_px: u32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: VISIBILITY_THRESHOLD,
            bottom_margin_px: VISIBILITY_BOTTOM_MARGIN_PX,
        }
    }
}

impl VisibilityConfig {
    /// CSS margin string in top/right/bottom/left order.
    pub fn root_margin(&self) -> String {
        if self.bottom_margin_px == 0 {
            return "0px 0px 0px 0px".to_string();
        }
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}
