//! Qix - an arcade line-drawing game prototype
//!
//! Core modules:
//! - `sim`: Motion model (moving segments, heading easing, drawables)
//! - `input`: Command translation and DAS auto-repeat
//! - `playfield`: Drawing cursor, drawable collection, frame composition
//! - `game`: The single-threaded poll/update/render loop
//! - `platform`: Clock and input-source collaborators
//! - `renderer`: Draw surface trait and a software canvas
//! - `settings`: Timing and display configuration

pub mod game;
pub mod input;
pub mod platform;
pub mod playfield;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, LoopControl};
pub use input::{AutoRepeat, Command, RepeatTiming};
pub use playfield::Playfield;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical canvas dimensions
    pub const WIDTH: u32 = 640;
    pub const HEIGHT: u32 = 480;

    /// DAS settings (milliseconds)
    pub const AUTO_REPEAT_INITIAL_DELAY_MS: u64 = 300;
    pub const AUTO_REPEAT_SUBSEQUENT_DELAY_MS: u64 = 50;

    /// Default simulated frame length for the headless driver
    pub const FRAME_MILLIS: u64 = 16;

    /// Qix cluster defaults
    pub const QIX_HEADING: f64 = 65.0;
    pub const QIX_SPEED: f64 = 150.0;
    pub const QIX_LINE_LENGTH: f64 = 100.0;
}

/// Convert a heading in degrees to radians
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Rotation used when blitting a textured line.
///
/// Maps a counter-clockwise heading onto the clockwise rotation the draw
/// surface expects. The result lies in `(0, 360]`; a heading of 0 yields 360.
/// Fractions are truncated and non-finite headings count as 0.
#[inline]
pub fn counter_clockwise(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 360.0;
    }
    360.0 - degrees.trunc().rem_euclid(360.0)
}
