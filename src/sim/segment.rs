//! Moving line segment with eased heading changes
//!
//! Headings are in degrees, counter-clockwise from the +x axis. Screen space
//! has y growing downward, so integration subtracts the sine term.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::to_radians;

/// A line that travels along its heading and turns gradually toward a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingSegment {
    /// Center of the line
    pub pos: DVec2,
    /// Travel speed (units/second); also drives the turn rate
    pub speed: f64,
    pub color: Color,
    /// Half of the line length
    pub radius: f64,
    /// Current heading (degrees)
    direction: f64,
    /// Heading being eased toward (degrees)
    target: f64,
    /// Heading has arrived at `target`
    reached: bool,
    /// A heading has been assigned at least once
    heading_set: bool,
}

impl MovingSegment {
    pub fn new(pos: DVec2, direction: f64, length: f64, speed: f64, color: Color) -> Self {
        let mut segment = Self {
            pos,
            speed,
            color,
            radius: length / 2.0,
            direction: 0.0,
            target: 0.0,
            reached: false,
            heading_set: false,
        };
        segment.set_direction(direction);
        segment
    }

    /// Current heading (degrees)
    #[inline]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Heading being eased toward (degrees)
    #[inline]
    pub fn target_direction(&self) -> f64 {
        self.target
    }

    /// Orientation of the drawn line, perpendicular to travel
    #[inline]
    pub fn angle(&self) -> f64 {
        self.direction + 90.0
    }

    #[inline]
    pub fn target_angle(&self) -> f64 {
        self.target + 90.0
    }

    #[inline]
    pub fn is_reached(&self) -> bool {
        self.reached
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.radius * 2.0
    }

    /// Angular rate used while easing (degrees/second)
    #[inline]
    pub fn turn_rate(&self) -> f64 {
        self.speed.abs() / 2.0
    }

    /// Point a new heading.
    ///
    /// The first heading ever assigned is taken immediately. Later headings
    /// become the easing target, starting from wherever the current heading
    /// is, even if a previous ease has not finished.
    pub fn set_direction(&mut self, degrees: f64) {
        if !self.heading_set {
            self.heading_set = true;
            self.direction = degrees;
            self.target = degrees;
            self.reached = true;
            return;
        }
        if self.reached && degrees == self.target {
            return;
        }
        self.target = degrees;
        self.reached = false;
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_length(&mut self, length: f64) {
        self.radius = length / 2.0;
    }

    /// Advance one frame of `delta` seconds
    pub fn advance(&mut self, delta: f64) {
        let heading = to_radians(self.direction);
        self.pos.x += heading.cos() * delta * self.speed;
        self.pos.y += -heading.sin() * delta * self.speed;

        self.ease(delta);
    }

    /// Turn toward the target by at most one frame's worth of rotation
    fn ease(&mut self, delta: f64) {
        if self.reached {
            return;
        }
        let step = self.turn_rate() * delta;
        let gap = self.target - self.direction;

        if gap.abs() <= step {
            self.direction = self.target;
            self.reached = true;
        } else if gap > 0.0 {
            self.direction += step;
        } else {
            self.direction -= step;
        }
    }

    /// End points of the drawn line
    pub fn endpoints(&self) -> (DVec2, DVec2) {
        let a = to_radians(self.angle());
        let b = a + std::f64::consts::PI;
        (
            self.pos + DVec2::new(a.cos(), -a.sin()) * self.radius,
            self.pos + DVec2::new(b.cos(), -b.sin()) * self.radius,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn segment(direction: f64, speed: f64) -> MovingSegment {
        MovingSegment::new(DVec2::new(200.0, 200.0), direction, 100.0, speed, Color::Red)
    }

    #[test]
    fn test_first_direction_snaps() {
        let s = segment(65.0, 150.0);
        assert_eq!(s.direction(), 65.0);
        assert_eq!(s.target_direction(), 65.0);
        assert_eq!(s.angle(), 155.0);
        assert!(s.is_reached());
    }

    #[test]
    fn test_position_integration_inverts_y() {
        let mut s = segment(90.0, 100.0);
        s.advance(0.5);
        assert!((s.pos.x - 200.0).abs() < EPS);
        assert!((s.pos.y - 150.0).abs() < EPS);

        let mut s = segment(0.0, 100.0);
        s.advance(0.25);
        assert!((s.pos.x - 225.0).abs() < EPS);
        assert!((s.pos.y - 200.0).abs() < EPS);
    }

    #[test]
    fn test_retarget_eases_instead_of_snapping() {
        let mut s = segment(0.0, 150.0);
        s.set_direction(90.0);
        assert!(!s.is_reached());
        assert_eq!(s.direction(), 0.0);
        assert_eq!(s.target_angle(), 180.0);

        s.advance(0.4);
        assert!((s.direction() - 30.0).abs() < EPS);
        assert!(!s.is_reached());
    }

    #[test]
    fn test_ease_reaches_target_after_1_2_seconds() {
        let mut s = segment(0.0, 150.0);
        s.set_direction(90.0);
        for _ in 0..12 {
            s.advance(0.1);
        }
        assert_eq!(s.direction(), 90.0);
        assert!(s.is_reached());
    }

    #[test]
    fn test_ease_single_large_frame_clamps() {
        let mut s = segment(0.0, 150.0);
        s.set_direction(90.0);
        s.advance(1.2);
        assert_eq!(s.direction(), 90.0);
        assert!(s.is_reached());

        let mut s = segment(0.0, 150.0);
        s.set_direction(90.0);
        s.advance(5.0);
        assert_eq!(s.direction(), 90.0);
    }

    #[test]
    fn test_ease_decreasing() {
        let mut s = segment(90.0, 100.0);
        s.set_direction(40.0);
        s.advance(0.5);
        assert!((s.direction() - 65.0).abs() < EPS);
        s.advance(0.5);
        assert_eq!(s.direction(), 40.0);
        assert!(s.is_reached());
    }

    #[test]
    fn test_retarget_mid_ease_starts_from_partial_heading() {
        let mut s = segment(0.0, 150.0);
        s.set_direction(90.0);
        s.advance(0.4); // 30 degrees in
        s.set_direction(-30.0);
        assert!((s.direction() - 30.0).abs() < EPS);
        s.advance(0.4);
        assert!((s.direction() - 0.0).abs() < EPS);
        s.advance(0.4);
        assert_eq!(s.direction(), -30.0);
        assert!(s.is_reached());
    }

    #[test]
    fn test_set_same_reached_target_is_noop() {
        let mut s = segment(0.0, 150.0);
        s.set_direction(90.0);
        s.advance(2.0);
        let before = s.clone();
        s.set_direction(90.0);
        assert_eq!(s, before);
        assert!(s.is_reached());
    }

    #[test]
    fn test_wraparound_retarget_is_numeric() {
        // 350 -> 10 turns down through 180 rather than across 0/360
        let mut s = segment(350.0, 100.0);
        s.set_direction(10.0);
        s.advance(1.0);
        assert!((s.direction() - 300.0).abs() < EPS);
        for _ in 0..6 {
            s.advance(1.0);
        }
        assert_eq!(s.direction(), 10.0);
        assert!(s.is_reached());
    }

    #[test]
    fn test_wraparound_retarget_from_past_target() {
        // Heading already numerically past the new target (near 0/360)
        let mut s = segment(5.0, 100.0);
        s.set_direction(355.0);
        s.advance(1.0);
        assert!((s.direction() - 55.0).abs() < EPS);
        s.set_direction(-5.0);
        s.advance(1.0);
        assert!((s.direction() - 5.0).abs() < EPS);
        s.advance(1.0);
        assert_eq!(s.direction(), -5.0);
    }

    #[test]
    fn test_zero_delta_does_not_move() {
        let mut s = segment(45.0, 150.0);
        s.set_direction(50.0);
        s.advance(0.0);
        assert_eq!(s.pos, DVec2::new(200.0, 200.0));
        assert_eq!(s.direction(), 45.0);
    }

    #[test]
    fn test_endpoints_perpendicular_to_heading() {
        // Heading 0 -> line is vertical, radius 50 above and below
        let s = segment(0.0, 150.0);
        let (a, b) = s.endpoints();
        assert!((a.x - 200.0).abs() < EPS && (a.y - 150.0).abs() < EPS);
        assert!((b.x - 200.0).abs() < EPS && (b.y - 250.0).abs() < EPS);
    }

    #[test]
    fn test_setters() {
        let mut s = segment(0.0, 150.0);
        s.set_length(40.0);
        s.set_speed(10.0);
        s.set_color(Color::Blue);
        assert_eq!(s.radius, 20.0);
        assert_eq!(s.length(), 40.0);
        assert_eq!(s.turn_rate(), 5.0);
        assert_eq!(s.color, Color::Blue);
    }

    proptest! {
        #[test]
        fn prop_no_overshoot(
            start in -720.0f64..720.0,
            target in -720.0f64..720.0,
            speed in 0.0f64..1000.0,
            deltas in proptest::collection::vec(0.0f64..0.5, 1..64),
        ) {
            let mut s = segment(start, speed);
            s.set_direction(target);
            let increasing = target >= start;
            for delta in deltas {
                s.advance(delta);
                if increasing {
                    prop_assert!(s.direction() <= target);
                } else {
                    prop_assert!(s.direction() >= target);
                }
                if s.is_reached() {
                    prop_assert_eq!(s.direction(), target);
                }
            }
        }
    }
}
