//! Frame buffer holding the rendered samples.

use crate::Color;
use lumen_math::Interval;
use rayon::prelude::*;

/// A `width x height` grid of float RGB samples.
///
/// Row 0 is the bottom row of the image, the same orientation the TGA
/// encoder expects.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Mutable rows paired with their index, bottom row first, for parallel
    /// rendering. A zero-width buffer yields no rows.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = (u32, &mut [Color])> {
        // A zero width means an empty buffer, max(1) only keeps chunking valid
        self.pixels
            .par_chunks_mut((self.width as usize).max(1))
            .enumerate()
            .map(|(j, row)| (j as u32, row))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to packed RGB bytes, bottom row first.
    ///
    /// Channels are clamped to [0, 1] and scaled by 255 (truncating).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Quantize a color to 8 bits per channel.
#[inline]
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let channel = |v: f32| (255.0 * Interval::UNIT.clamp(v)) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}
