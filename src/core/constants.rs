// Shared timing and threshold constants used by the motion core.

// Visibility tracking
pub const VISIBILITY_THRESHOLD: f64 = 0.1; // fraction of a region that must be on screen
pub const VISIBILITY_BOTTOM_MARGIN_PX: u32 = 50; // viewport bottom edge pulled up by this much

// Navbar
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0; // strictly greater than this counts as scrolled

// Counters
pub const COUNTER_DURATION_MS: u64 = 2000;

// Staggered entrance
pub const STAGGER_STEP_MS: u32 = 100;
pub const STAGGER_ANIMATION_SECS: f32 = 0.6;

// Parallax speed as a fraction of the scroll offset
pub const PARALLAX_SPEED: f64 = 0.5;

// Loading splash and intro reveal
pub const SPLASH_VISIBLE_MS: u32 = 1500;
pub const SPLASH_FADE_MS: u32 = 500;
pub const INTRO_DELAY_MS: u32 = 1500;
pub const INTRO_STEP_MS: u32 = 50;

// Product filter
pub const FILTER_ALL: &str = "all";
pub const FILTER_FADE_DELAY_MS: u32 = 100;

// Particle background
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_DELAY_MAX_SECS: f64 = 6.0;
pub const PARTICLE_DURATION_MIN_SECS: f64 = 3.0;
pub const PARTICLE_DURATION_SPAN_SECS: f64 = 3.0;
pub const PARTICLE_OPACITY_MIN: f64 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f64 = 0.5;
pub const PARTICLE_RESPAWN_TOP_PX: f64 = -10.0;

// Keyboard scrolling step
pub const KEY_SCROLL_STEP_PX: f64 = 100.0;

// Icon float and logo glitch
pub const FLOAT_DURATION_SECS: f64 = 3.0;
pub const FLOAT_STEP_SECS: f64 = 0.5;
pub const GLITCH_INTERVAL_MS: u32 = 10_000;
pub const GLITCH_ACTIVE_MS: u32 = 300;
