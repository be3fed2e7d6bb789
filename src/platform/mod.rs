//! Platform collaborators
//!
//! The game loop reaches the outside world only through these traits:
//! - [`Clock`]: wall time and per-frame deltas
//! - [`InputSource`]: non-blocking stream of raw input events

pub mod clock;
pub mod script;

pub use clock::{Clock, ManualClock, SystemClock};
pub use script::{InputSource, ScriptedEvent, ScriptedInput};
