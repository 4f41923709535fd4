use super::constants::{SPLASH_FADE_MS, SPLASH_VISIBLE_MS};

/// Steps of the loading splash, each run by its own timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashStep {
    /// Add the `hidden` class so CSS fades the overlay out.
    Hide,
    /// Detach the overlay element.
    Remove,
}

/// Absolute delays (from start-up) for each splash step, in order.
pub fn splash_timeline() -> [(u32, SplashStep); 2] {
    [
        (SPLASH_VISIBLE_MS, SplashStep::Hide),
        (SPLASH_VISIBLE_MS + SPLASH_FADE_MS, SplashStep::Remove),
    ]
}

/// How the intro cascade gets scheduled relative to page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroStart {
    /// `load` has already fired; start the delay timer now.
    Immediately,
    /// Wait for the window `load` event.
    OnLoad,
}

/// Pick the intro trigger from `document.readyState`. The wasm module usually
/// finishes instantiating after `load`, so a listener alone would never fire.
pub fn intro_start_for(ready_state: &str) -> IntroStart {
    if ready_state == "complete" {
        IntroStart::Immediately
    } else {
        IntroStart::OnLoad
    }
}
