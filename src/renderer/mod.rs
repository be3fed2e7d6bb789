//! Rendering
//!
//! The playfield draws through a [`Surface`], the single rendering context it
//! owns. Drawables never hold a surface themselves; they are handed to
//! [`draw_drawable`] each frame.

pub mod canvas;

use glam::DVec2;

use crate::counter_clockwise;
use crate::sim::{Color, Drawable, MovingSegment};

pub use canvas::Canvas;

/// Display surface used by the playfield
pub trait Surface {
    /// Logical size in pixels
    fn size(&self) -> (u32, u32);

    /// Blank the persistent playfield texture
    fn clear_texture(&mut self);

    /// Mark one pixel on the persistent playfield texture
    fn plot(&mut self, x: i32, y: i32, color: Color);

    /// Start a frame: clear the back buffer and copy the playfield texture in
    fn begin_frame(&mut self);

    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Color);

    /// Draw a one-pixel-high bar of `length` whose unrotated top-left corner is
    /// `origin`, rotated clockwise by `degrees` about its center
    fn draw_rotated_bar(&mut self, origin: DVec2, length: f64, degrees: f64, color: Color);

    /// Finish the frame
    fn present(&mut self);
}

/// Draw one drawable in its style
pub fn draw_drawable<S: Surface + ?Sized>(surface: &mut S, drawable: &Drawable) {
    match drawable {
        Drawable::Line(segment) => draw_vector_line(surface, segment),
        Drawable::TexturedLine(segment) => {
            surface.draw_rotated_bar(
                segment.pos,
                segment.length(),
                counter_clockwise(segment.angle()),
                segment.color,
            );
        }
        Drawable::Qix(cluster) => {
            for segment in &cluster.lines {
                draw_vector_line(surface, segment);
            }
        }
    }
}

fn draw_vector_line<S: Surface + ?Sized>(surface: &mut S, segment: &MovingSegment) {
    let (from, to) = segment.endpoints();
    surface.draw_line(from, to, segment.color);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records draw calls instead of rasterizing
    #[derive(Default)]
    struct Recorder {
        lines: Vec<(DVec2, DVec2, Color)>,
        bars: Vec<(DVec2, f64, f64, Color)>,
    }

    impl Surface for Recorder {
        fn size(&self) -> (u32, u32) {
            (640, 480)
        }
        fn clear_texture(&mut self) {}
        fn plot(&mut self, _x: i32, _y: i32, _color: Color) {}
        fn begin_frame(&mut self) {}
        fn draw_line(&mut self, from: DVec2, to: DVec2, color: Color) {
            self.lines.push((from, to, color));
        }
        fn draw_rotated_bar(&mut self, origin: DVec2, length: f64, degrees: f64, color: Color) {
            self.bars.push((origin, length, degrees, color));
        }
        fn present(&mut self) {}
    }

    #[test]
    fn test_qix_draws_every_line() {
        let mut rec = Recorder::default();
        draw_drawable(&mut rec, &Drawable::qix(200.0, 200.0));
        assert_eq!(rec.lines.len(), 7);
        assert_eq!(rec.lines[4].2, Color::Green);
    }

    #[test]
    fn test_textured_line_uses_display_rotation() {
        let mut rec = Recorder::default();
        let line = Drawable::textured_line(50.0, 60.0, 0.0, 120.0, 10.0, Color::Blue);
        draw_drawable(&mut rec, &line);
        assert_eq!(rec.bars, vec![(DVec2::new(50.0, 60.0), 120.0, 270.0, Color::Blue)]);
    }
}
