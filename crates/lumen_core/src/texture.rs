//! CPU textures for environment lookups.
//!
//! Texels are stored as linear RGB floats in [0, 1], row-major with the
//! bottom row first, matching the layout produced by [`crate::tga::decode`].

use std::path::Path;

use lumen_math::Vec3;

use crate::tga::{self, TgaImage, TgaResult};

/// A loaded texture with pixel data.
#[derive(Clone, Debug)]
pub struct Texture {
    /// Texture width in pixels
    pub width: u32,

    /// Texture height in pixels
    pub height: u32,

    /// RGB texels, row-major, bottom row first
    pub pixels: Vec<Vec3>,

    /// Original file path (for debugging)
    pub path: String,
}

impl Texture {
    /// Create a new texture from pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<Vec3>, path: impl Into<String>) -> Self {
        Self {
            width,
            height,
            pixels,
            path: path.into(),
        }
    }

    /// Create a solid color texture (1x1).
    pub fn solid(color: Vec3) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![color],
            path: "<solid>".to_string(),
        }
    }

    /// Build a texture from a decoded TGA image.
    ///
    /// Channel bytes are divided by 255 without any sRGB conversion; alpha
    /// is dropped.
    pub fn from_tga(image: &TgaImage, path: impl Into<String>) -> Self {
        let bpp = image.bytes_per_pixel().max(3);
        let pixels = image
            .pixels
            .chunks_exact(bpp)
            .map(|p| {
                Vec3::new(
                    p[0] as f32 / 255.0,
                    p[1] as f32 / 255.0,
                    p[2] as f32 / 255.0,
                )
            })
            .collect();

        Self::new(image.width, image.height, pixels, path)
    }

    /// Load a texture from a TGA file.
    pub fn load(path: impl AsRef<Path>) -> TgaResult<Self> {
        let path = path.as_ref();
        let image = tga::decode(path)?;
        let texture = Self::from_tga(&image, path.to_string_lossy());

        log::debug!(
            "Loaded texture: {} ({}x{}, {:.1} KB)",
            texture.path,
            texture.width,
            texture.height,
            texture.size_bytes() as f32 / 1024.0
        );

        Ok(texture)
    }

    /// Nearest-neighbour lookup at texture coordinates `(s, t)`.
    ///
    /// `(0, 0)` is the bottom-left corner. Coordinates outside [0, 1] are
    /// clamped to the edge texels.
    pub fn texel(&self, s: f32, t: f32) -> Vec3 {
        if self.width == 0 || self.height == 0 {
            return Vec3::ZERO;
        }

        let w = self.width as f32;
        let h = self.height as f32;
        let x = (s * w).min(w - 1.0).max(0.0) as u32;
        let y = (t * h).min(h - 1.0).max(0.0) as u32;

        self.get_pixel(x, y)
    }

    /// Get pixel at integer coordinates (row 0 is the bottom row).
    fn get_pixel(&self, x: u32, y: u32) -> Vec3 {
        let idx = (y * self.width + x) as usize;
        self.pixels.get(idx).copied().unwrap_or(Vec3::ZERO)
    }

    /// Get total size in bytes (approximate).
    pub fn size_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<Vec3>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Texture {
        // Bottom row: red, green. Top row: blue, white.
        Texture::new(
            2,
            2,
            vec![Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE],
            "<checker>",
        )
    }

    #[test]
    fn test_solid_texture() {
        let tex = Texture::solid(Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(tex.width, 1);
        assert_eq!(tex.height, 1);
        assert_eq!(tex.texel(0.5, 0.5), Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(tex.texel(1.0, 1.0), Vec3::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_texel_quadrants() {
        let tex = checker();
        assert_eq!(tex.texel(0.25, 0.25), Vec3::X);
        assert_eq!(tex.texel(0.75, 0.25), Vec3::Y);
        assert_eq!(tex.texel(0.25, 0.75), Vec3::Z);
        assert_eq!(tex.texel(0.75, 0.75), Vec3::ONE);
    }

    #[test]
    fn test_texel_clamps_to_edges() {
        let tex = checker();
        assert_eq!(tex.texel(1.0, 1.0), Vec3::ONE);
        assert_eq!(tex.texel(-0.5, -3.0), Vec3::X);
        assert_eq!(tex.texel(7.0, 0.0), Vec3::Y);
    }

    #[test]
    fn test_from_tga_normalizes_bytes() {
        let image = TgaImage {
            width: 1,
            height: 1,
            bits_per_pixel: 32,
            pixels: vec![255, 0, 51, 128],
        };
        let tex = Texture::from_tga(&image, "mem");
        assert_eq!(tex.pixels.len(), 1);
        assert!((tex.pixels[0] - Vec3::new(1.0, 0.0, 0.2)).length() < 1e-6);
    }

    #[test]
    fn test_load_round_trip() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tex.tga");
        tga::encode(&path, 2, 1, 3, &[255, 0, 0, 0, 0, 255]).unwrap();

        let tex = Texture::load(&path).unwrap();
        assert_eq!((tex.width, tex.height), (2, 1));
        assert_eq!(tex.texel(0.0, 0.0), Vec3::X);
        assert_eq!(tex.texel(0.9, 0.0), Vec3::Z);
    }
}
