//! Software draw surface
//!
//! Two RGBA buffers: the persistent playfield texture the cursor draws into,
//! and the frame buffer composed every update.

use anyhow::{Context, Result, bail};
use glam::DVec2;

use super::Surface;
use crate::sim::Color;

/// Largest accepted width or height
pub const MAX_DIMENSION: u32 = 16384;

pub struct Canvas {
    width: u32,
    height: u32,
    texture: Vec<u32>,
    frame: Vec<u32>,
    frames_presented: u64,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            bail!("Failed to create display surface: invalid size {width}x{height}");
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .with_context(|| {
                format!("Failed to create display surface: {width}x{height} is too large")
            })?;
        Ok(Self {
            width,
            height,
            texture: blank_buffer(len)?,
            frame: blank_buffer(len)?,
            frames_presented: 0,
        })
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn texture_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x.into(), y.into()).map(|i| self.texture[i])
    }

    pub fn frame_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x.into(), y.into()).map(|i| self.frame[i])
    }

    /// Non-blank pixels on the playfield texture
    pub fn lit_texture_pixels(&self) -> usize {
        let blank = Color::Black.packed();
        self.texture.iter().filter(|&&p| p != blank).count()
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.frame[i] = color.packed();
        }
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear_texture(&mut self) {
        self.texture.fill(Color::Black.packed());
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x.into(), y.into()) {
            self.texture[i] = color.packed();
        }
    }

    fn begin_frame(&mut self) {
        self.frame.copy_from_slice(&self.texture);
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Color) {
        let max = DVec2::new(f64::from(self.width - 1), f64::from(self.height - 1));
        let Some((from, to)) = clip_line(from, to, max) else {
            return;
        };

        // Bresenham over the clipped span
        let (mut x0, mut y0) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn draw_rotated_bar(&mut self, origin: DVec2, length: f64, degrees: f64, color: Color) {
        let center = origin + DVec2::new(length / 2.0, 0.5);
        let theta = crate::to_radians(degrees);
        // Clockwise on screen: y grows downward
        let half = DVec2::new(theta.cos(), theta.sin()) * (length / 2.0);
        self.draw_line(center - half, center + half, color);
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

fn blank_buffer(len: usize) -> Result<Vec<u32>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .with_context(|| format!("Failed to allocate display surface of {len} pixels"))?;
    buffer.resize(len, Color::Black.packed());
    Ok(buffer)
}

/// Liang-Barsky clip of a segment to `[0, max.x] x [0, max.y]`.
/// `None` when the segment misses the rectangle or is not finite.
fn clip_line(from: DVec2, to: DVec2, max: DVec2) -> Option<(DVec2, DVec2)> {
    if !from.is_finite() || !to.is_finite() {
        return None;
    }
    let d = to - from;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-d.x, from.x),
        (d.x, max.x - from.x),
        (-d.y, from.y),
        (d.y, max.y - from.y),
    ] {
        if p == 0.0 {
            // Parallel to this edge and outside it
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((from + d * t0, from + d * t1))
}
