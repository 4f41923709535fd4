/// Element ids, selectors and class names the page markup and stylesheet
/// agree on.
///
/// These keep string literals out of the wiring code so a markup rename is a
/// one-line change.
// Element ids
pub const NAVBAR_ID: &str = "navbar";
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const PARTICLES_ID: &str = "particles";

// Selectors
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const PARALLAX_SELECTOR: &str = ".hero-image";
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PRODUCT_CARD_SELECTOR: &str = ".product-card";
pub const ACCORDION_ITEM_SELECTOR: &str = ".accordion-item";
pub const ACCORDION_HEADER_SELECTOR: &str = ".accordion-header";
pub const FLOAT_ICON_SELECTOR: &str = ".product-icon, .industry-icon, .feature-icon";
pub const LOGO_SELECTOR: &str = ".logo-text";
pub const INTRO_SELECTOR: &str =
    "h1, h2, h3, p, .btn, .product-card, .industry-card, .feature-card";

// Attributes
pub const REGION_ID_ATTR: &str = "data-region-id";
pub const COUNTER_TARGET_ATTR: &str = "data-target";
pub const FILTER_ATTR: &str = "data-filter";
pub const CATEGORY_ATTR: &str = "data-category";

// Classes
pub const ANIMATE_ON_SCROLL_CLASS: &str = "animate-on-scroll";
pub const ANIMATED_CLASS: &str = "animated";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const PARTICLE_CLASS: &str = "particle";
pub const SPLASH_CLASS: &str = "loading-animation";
pub const LOADER_CLASS: &str = "loader";

// Inline styles
pub const FILTER_FADE_ANIMATION: &str = "fadeIn 0.5s ease";
pub const PROGRESS_BAR_STYLE: &str = "position:fixed;top:0;left:0;width:0%;height:3px;\
background:linear-gradient(90deg, #ffd700, #4299e1);z-index:9999;transition:width 0.1s ease;";
pub const INTRO_HIDDEN_OPACITY: &str = "0";
pub const INTRO_HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const INTRO_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
pub const GLITCH_ANIMATION: &str = "glitch 0.3s ease-in-out";
pub const GLITCH_KEYFRAMES: &str = "@keyframes glitch {
    0% { transform: translate(0); }
    20% { transform: translate(-2px, 2px); }
    40% { transform: translate(-2px, -2px); }
    60% { transform: translate(2px, 2px); }
    80% { transform: translate(2px, -2px); }
    100% { transform: translate(0); }
}";
