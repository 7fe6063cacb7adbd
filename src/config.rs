use std::time::Duration;

use log::Level;

use crate::motion::Spring;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose listener/observer lifecycle while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Delay before mount-time entrances switch to their shown pose.
pub const MOUNT_TICK_MS: u32 = 16;
/// Cursor follower spring step.
pub const FRAME_MS: u32 = 16;

pub const REVEAL_DURATION: Duration = Duration::from_millis(800);
pub const WORD_DURATION: Duration = Duration::from_millis(600);
pub const LIST_ITEM_DURATION: Duration = Duration::from_millis(500);

pub const WORD_STEP: Duration = Duration::from_millis(100);
pub const NAV_STEP: Duration = Duration::from_millis(100);
pub const FEATURE_STEP: Duration = Duration::from_millis(200);
pub const TESTIMONIAL_STEP: Duration = Duration::from_millis(150);
pub const PLAN_STEP: Duration = Duration::from_millis(100);
pub const PLAN_FEATURE_STEP: Duration = Duration::from_millis(50);

/// Hero parallax: progress 0..1 moves the hero down 0..50%.
pub const HERO_PARALLAX: ([f64; 2], [f64; 2]) = ([0.0, 1.0], [0.0, 50.0]);
/// Hero fade: fully gone after the first 30% of the page.
pub const HERO_FADE: ([f64; 2], [f64; 2]) = ([0.0, 0.3], [1.0, 0.0]);

/// Follower dot is 24px wide; shifting by half centers it on the pointer.
pub const CURSOR_OFFSET: f64 = -12.0;

pub fn cursor_spring() -> Spring {
    Spring::new(500.0, 28.0, 1.0)
}
