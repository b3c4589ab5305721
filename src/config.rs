use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Vertical scroll offset (px) past which the navigation switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Share of a counter that must be on screen before it starts counting.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 60;

/// How long the hero button shows "Processing..." after it is pressed.
pub const UPLOAD_INDICATOR_MS: u32 = 2000;
