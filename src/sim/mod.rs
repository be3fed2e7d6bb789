//! Motion model
//!
//! Pure state transitions for everything that moves on the playfield:
//! - Delta-time integration of position
//! - Heading easing toward a target
//! - No rendering or platform dependencies

pub mod color;
pub mod drawable;
pub mod segment;

pub use color::Color;
pub use drawable::{Drawable, QixCluster};
pub use segment::MovingSegment;
