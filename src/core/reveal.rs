use super::constants::{STAGGER_ANIMATION_SECS, STAGGER_STEP_MS};
use super::visibility::{RegionId, VisibilityEvent};
use fnv::{FnvHashMap, FnvHashSet};

/// Which reveal behaviour a region gets the first time it becomes visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Only the generic `animated` tag.
    Plain,
    /// Nested counters count up from zero.
    CounterGroup,
    /// Direct children cascade in, first to last.
    StaggeredGroup,
}

/// Page regions and their kinds, in enumeration order. An element matching
/// several selectors keeps the first kind it was enumerated with.
pub const REGION_TABLE: &[(&str, RegionKind)] = &[
    (".hero-stats", RegionKind::CounterGroup),
    (".products-grid", RegionKind::StaggeredGroup),
    (".industries-grid", RegionKind::StaggeredGroup),
    (".features-grid", RegionKind::StaggeredGroup),
    (".about-content", RegionKind::Plain),
    (".section-header", RegionKind::Plain),
];

/// Side effects a reveal can request. The browser layer applies them to the
/// DOM; tests record them.
pub trait RevealEffects {
    fn mark_animated(&mut self, region: RegionId);
    fn start_counters(&mut self, region: RegionId);
    fn stagger_children(&mut self, region: RegionId);
}

/// Delay before the `index`-th child's entrance mutation runs.
#[inline]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

/// Inline `animation` value for the `index`-th staggered child.
pub fn stagger_animation(index: usize, step_ms: u32) -> String {
    let delay_secs = stagger_delay_ms(index, step_ms) as f32 / 1000.0;
    format!(
        "slideInUp {}s ease-out {}s both",
        STAGGER_ANIMATION_SECS, delay_secs
    )
}

/// Per-child delays for a group of `count` children, in document order.
pub fn stagger_schedule(count: usize, step_ms: u32) -> impl Iterator<Item = u32> {
    (0..count).map(move |i| stagger_delay_ms(i, step_ms))
}

/// Routes each region's first visible event to its reveal behaviour exactly once.
#[derive(Debug, Default)]
pub struct RevealDispatcher {
    kinds: FnvHashMap<RegionId, RegionKind>,
    revealed: FnvHashSet<RegionId>,
    pub stagger_step_ms: u32,
}

impl RevealDispatcher {
    pub fn new(stagger_step_ms: u32) -> Self {
        Self {
            kinds: FnvHashMap::default(),
            revealed: FnvHashSet::default(),
            stagger_step_ms,
        }
    }

    pub fn with_default_step() -> Self {
        Self::new(STAGGER_STEP_MS)
    }

    pub fn register(&mut self, region: RegionId, kind: RegionKind) {
        self.kinds.insert(region, kind);
    }

    pub fn kind(&self, region: RegionId) -> Option<RegionKind> {
        self.kinds.get(&region).copied()
    }

    pub fn is_revealed(&self, region: RegionId) -> bool {
        self.revealed.contains(&region)
    }

    pub fn region_count(&self) -> usize {
        self.kinds.len()
    }

    /// Handle one visibility event. Returns true when it triggered a reveal.
    pub fn dispatch(&mut self, event: VisibilityEvent, effects: &mut impl RevealEffects) -> bool {
        if !event.visible {
            return false;
        }
        let Some(kind) = self.kind(event.region) else {
            return false;
        };
        if !self.revealed.insert(event.region) {
            return false;
        }
        effects.mark_animated(event.region);
        match kind {
            RegionKind::Plain => {}
            RegionKind::CounterGroup => effects.start_counters(event.region),
            RegionKind::StaggeredGroup => effects.stagger_children(event.region),
        }
        true
    }
}
