//! Objects owned by the playfield and advanced once per frame

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::segment::MovingSegment;
use crate::consts::{QIX_HEADING, QIX_LINE_LENGTH, QIX_SPEED};

/// Per-line layout of the Qix: (dx, dy, length, color) from the cluster origin
const QIX_LINES: [(f64, f64, f64, Color); 7] = [
    (0.0, 0.0, QIX_LINE_LENGTH, Color::Red),
    (30.0, -10.0, QIX_LINE_LENGTH, Color::Red),
    (60.0, -20.0, QIX_LINE_LENGTH, Color::Red),
    (90.0, -30.0, QIX_LINE_LENGTH, Color::Red),
    (120.0, -40.0, QIX_LINE_LENGTH * 2.0, Color::Green),
    (150.0, -50.0, QIX_LINE_LENGTH, Color::Blue),
    (180.0, -60.0, QIX_LINE_LENGTH, Color::Blue),
];

/// A group of lines moving together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QixCluster {
    pub lines: Vec<MovingSegment>,
}

impl QixCluster {
    /// The seven-line Qix anchored at `origin`
    pub fn new(origin: DVec2) -> Self {
        let lines = QIX_LINES
            .iter()
            .map(|&(dx, dy, length, color)| {
                MovingSegment::new(
                    origin + DVec2::new(dx, dy),
                    QIX_HEADING,
                    length,
                    QIX_SPEED,
                    color,
                )
            })
            .collect();
        Self { lines }
    }
}

/// Everything the playfield can hold, dispatched by variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Drawable {
    /// Drawn as a vector line between its end points
    Line(MovingSegment),
    /// Drawn as a one-pixel bar rotated by its display angle
    TexturedLine(MovingSegment),
    Qix(QixCluster),
}

impl Drawable {
    pub fn line(x: f64, y: f64, direction: f64, length: f64, speed: f64, color: Color) -> Self {
        Drawable::Line(MovingSegment::new(DVec2::new(x, y), direction, length, speed, color))
    }

    pub fn textured_line(
        x: f64,
        y: f64,
        direction: f64,
        length: f64,
        speed: f64,
        color: Color,
    ) -> Self {
        Drawable::TexturedLine(MovingSegment::new(
            DVec2::new(x, y),
            direction,
            length,
            speed,
            color,
        ))
    }

    pub fn qix(x: f64, y: f64) -> Self {
        Drawable::Qix(QixCluster::new(DVec2::new(x, y)))
    }

    /// Short label for logs
    pub fn name(&self) -> &'static str {
        match self {
            Drawable::Line(_) => "line",
            Drawable::TexturedLine(_) => "textured-line",
            Drawable::Qix(_) => "qix",
        }
    }

    pub fn segments(&self) -> &[MovingSegment] {
        match self {
            Drawable::Line(s) | Drawable::TexturedLine(s) => std::slice::from_ref(s),
            Drawable::Qix(q) => &q.lines,
        }
    }

    pub fn segments_mut(&mut self) -> &mut [MovingSegment] {
        match self {
            Drawable::Line(s) | Drawable::TexturedLine(s) => std::slice::from_mut(s),
            Drawable::Qix(q) => &mut q.lines,
        }
    }

    /// Advance every segment by `delta` seconds
    pub fn advance(&mut self, delta: f64) {
        for segment in self.segments_mut() {
            segment.advance(delta);
        }
    }

    pub fn set_direction(&mut self, degrees: f64) {
        for segment in self.segments_mut() {
            segment.set_direction(degrees);
        }
    }

    pub fn set_speed(&mut self, speed: f64) {
        for segment in self.segments_mut() {
            segment.set_speed(speed);
        }
    }

    pub fn set_color(&mut self, color: Color) {
        for segment in self.segments_mut() {
            segment.set_color(color);
        }
    }

    pub fn set_length(&mut self, length: f64) {
        for segment in self.segments_mut() {
            segment.set_length(length);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qix_layout() {
        let qix = QixCluster::new(DVec2::new(200.0, 200.0));
        assert_eq!(qix.lines.len(), 7);
        assert_eq!(qix.lines[0].pos, DVec2::new(200.0, 200.0));
        assert_eq!(qix.lines[6].pos, DVec2::new(380.0, 140.0));
        assert_eq!(qix.lines[4].length(), 200.0);
        assert_eq!(qix.lines[4].color, Color::Green);
        assert!(qix.lines.iter().all(|l| l.direction() == QIX_HEADING));
        assert!(qix.lines.iter().all(|l| l.speed == QIX_SPEED));
    }

    #[test]
    fn test_advance_moves_all_lines_together() {
        let mut qix = Drawable::qix(100.0, 300.0);
        let before: Vec<DVec2> = qix.segments().iter().map(|s| s.pos).collect();
        qix.advance(0.1);
        for (old, seg) in before.iter().zip(qix.segments()) {
            let moved = seg.pos - *old;
            assert!((moved.length() - QIX_SPEED * 0.1).abs() < 1e-9);
        }
    }

    #[test]
    fn test_set_direction_reaches_every_line() {
        let mut qix = Drawable::qix(100.0, 300.0);
        qix.set_direction(10.0);
        assert!(qix.segments().iter().all(|s| s.target_direction() == 10.0));
        assert!(qix.segments().iter().all(|s| !s.is_reached()));
    }

    #[test]
    fn test_single_line_variants() {
        let mut line = Drawable::line(10.0, 10.0, 0.0, 50.0, 20.0, Color::White);
        assert_eq!(line.segments().len(), 1);
        line.set_length(80.0);
        line.set_color(Color::Green);
        line.set_speed(40.0);
        let s = &line.segments()[0];
        assert_eq!(s.length(), 80.0);
        assert_eq!(s.color, Color::Green);
        assert_eq!(s.speed, 40.0);

        let textured = Drawable::textured_line(10.0, 10.0, 0.0, 50.0, 20.0, Color::White);
        assert_eq!(textured.name(), "textured-line");
    }
}
