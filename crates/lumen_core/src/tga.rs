//! Truevision TGA decoding and encoding.
//!
//! Pixel buffers crossing this module are row-major with the bottom row
//! first and channels in RGB(A) order. Only uncompressed true-color (type 2)
//! and greyscale (type 3) files are read; decoding of the pixel payload is
//! done by the `image` crate, which also writes files as uncompressed
//! type 2 with a top-left origin.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::tga::TgaEncoder;
use image::{ColorType, DynamicImage, ImageFormat};
use thiserror::Error;

/// Size of the fixed TGA header in bytes.
const HEADER_LEN: usize = 18;

const TYPE_INDEXED: u8 = 1;
const TYPE_TRUE_COLOR: u8 = 2;
const TYPE_GREY: u8 = 3;
const TYPE_INDEXED_RLE: u8 = 9;

/// Errors that can occur while reading or writing TGA files.
#[derive(Error, Debug)]
pub enum TgaError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: file is truncated")]
    Read { path: PathBuf },

    #[error("Color-indexed TGA is not supported: {path}")]
    IndexedColor { path: PathBuf },

    #[error("Compressed TGA (image type {image_type}) is not supported: {path}")]
    Compressed { path: PathBuf, image_type: u8 },

    #[error("Unsupported bytes per pixel: {0} (expected 3 or 4)")]
    BytesPerPixel(u8),

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Image is too large for TGA: {width}x{height}")]
    Dimensions { width: u32, height: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type TgaResult<T> = Result<T, TgaError>;

/// A decoded TGA image.
#[derive(Debug, Clone)]
pub struct TgaImage {
    pub width: u32,
    pub height: u32,
    /// Bits per pixel of `pixels`: 24 for RGB, 32 for RGBA.
    pub bits_per_pixel: u8,
    /// Row-major pixel bytes, bottom row first.
    pub pixels: Vec<u8>,
}

impl TgaImage {
    /// Number of bytes per pixel in `pixels`.
    pub fn bytes_per_pixel(&self) -> usize {
        self.bits_per_pixel as usize / 8
    }
}

/// Decode a TGA file.
///
/// Greyscale images are expanded to RGB. Images with an alpha channel keep
/// it (32 bits per pixel).
pub fn decode(path: impl AsRef<Path>) -> TgaResult<TgaImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| TgaError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.len() < HEADER_LEN {
        return Err(TgaError::Read {
            path: path.to_path_buf(),
        });
    }

    match bytes[2] {
        TYPE_TRUE_COLOR | TYPE_GREY => {}
        TYPE_INDEXED | TYPE_INDEXED_RLE => {
            return Err(TgaError::IndexedColor {
                path: path.to_path_buf(),
            })
        }
        image_type => {
            return Err(TgaError::Compressed {
                path: path.to_path_buf(),
                image_type,
            })
        }
    }

    let img = image::load_from_memory_with_format(&bytes, ImageFormat::Tga)?;
    let (width, height, bits_per_pixel, top_down) = match &img {
        DynamicImage::ImageRgba8(_) | DynamicImage::ImageLumaA8(_) => {
            let rgba = img.to_rgba8();
            let (w, h) = rgba.dimensions();
            (w, h, 32u8, rgba.into_raw())
        }
        _ => {
            let rgb = img.to_rgb8();
            let (w, h) = rgb.dimensions();
            (w, h, 24u8, rgb.into_raw())
        }
    };

    let stride = width as usize * (bits_per_pixel as usize / 8);
    let pixels = flip_rows(&top_down, stride);

    log::debug!(
        "Decoded {} ({}x{}, {} bpp)",
        path.display(),
        width,
        height,
        bits_per_pixel
    );

    Ok(TgaImage {
        width,
        height,
        bits_per_pixel,
        pixels,
    })
}

/// Encode a pixel buffer as an uncompressed TGA file.
///
/// `pixels` must hold `width * height * bytes_per_pixel` bytes, bottom row
/// first, RGB(A) order.
pub fn encode(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    bytes_per_pixel: u8,
    pixels: &[u8],
) -> TgaResult<()> {
    if bytes_per_pixel != 3 && bytes_per_pixel != 4 {
        return Err(TgaError::BytesPerPixel(bytes_per_pixel));
    }
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(TgaError::Dimensions { width, height });
    }

    let expected = width as usize * height as usize * bytes_per_pixel as usize;
    if pixels.len() != expected {
        return Err(TgaError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }

    let color_type = if bytes_per_pixel == 4 {
        ColorType::Rgba8
    } else {
        ColorType::Rgb8
    };
    let top_down = flip_rows(pixels, width as usize * bytes_per_pixel as usize);

    let path = path.as_ref();
    let file = File::create(path).map_err(|source| TgaError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    TgaEncoder::new(&mut writer)
        .disable_rle()
        .encode(&top_down, width, height, color_type)?;
    writer.flush()?;

    log::debug!("Encoded {} ({}x{})", path.display(), width, height);
    Ok(())
}

/// Reverse the row order of a tightly packed pixel buffer.
fn flip_rows(data: &[u8], stride: usize) -> Vec<u8> {
    if stride == 0 {
        return Vec::new();
    }
    data.chunks_exact(stride).rev().flatten().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_raw(path: &Path, image_type: u8) {
        let mut bytes = vec![0u8; HEADER_LEN];
        bytes[2] = image_type;
        bytes[12] = 1;
        bytes[14] = 1;
        bytes[16] = 24;
        bytes.extend_from_slice(&[0, 0, 0]);
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_encode_decode_preserves_orientation_and_channels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two_rows.tga");

        // Bottom row red, top row blue
        let pixels = [255, 0, 0, 0, 0, 255];
        encode(&path, 1, 2, 3, &pixels).unwrap();

        let img = decode(&path).unwrap();
        assert_eq!(img.width, 1);
        assert_eq!(img.height, 2);
        assert_eq!(img.bits_per_pixel, 24);
        assert_eq!(img.pixels, pixels);
    }

    #[test]
    fn test_encode_writes_uncompressed_bgr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("px.tga");
        encode(&path, 1, 1, 3, &[10, 20, 30]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes[2], TYPE_TRUE_COLOR);
        assert_eq!(bytes[16], 24);
        assert_eq!(&bytes[HEADER_LEN..HEADER_LEN + 3], &[30, 20, 10]);
    }

    #[test]
    fn test_encode_decode_with_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.tga");

        // Bottom row opaque green, top row half-transparent white
        let pixels = [0, 255, 0, 255, 255, 255, 255, 128];
        encode(&path, 1, 2, 4, &pixels).unwrap();

        let img = decode(&path).unwrap();
        assert_eq!(img.bits_per_pixel, 32);
        assert_eq!(img.pixels, pixels);
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode(dir.path().join("nope.tga")).unwrap_err();
        assert!(matches!(err, TgaError::Open { .. }));
    }

    #[test]
    fn test_decode_truncated_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.tga");
        std::fs::write(&path, [0u8; 5]).unwrap();
        assert!(matches!(decode(&path), Err(TgaError::Read { .. })));
    }

    #[test]
    fn test_decode_rejects_indexed_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("indexed.tga");
        write_raw(&path, TYPE_INDEXED);
        assert!(matches!(decode(&path), Err(TgaError::IndexedColor { .. })));
    }

    #[test]
    fn test_decode_rejects_compressed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rle.tga");
        write_raw(&path, 10);
        assert!(matches!(
            decode(&path),
            Err(TgaError::Compressed { image_type: 10, .. })
        ));
    }

    #[test]
    fn test_encode_rejects_bad_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.tga");

        assert!(matches!(
            encode(&path, 2, 2, 3, &[0u8; 5]),
            Err(TgaError::BufferSize { expected: 12, actual: 5 })
        ));
        assert!(matches!(
            encode(&path, 1, 1, 2, &[0u8; 2]),
            Err(TgaError::BytesPerPixel(2))
        ));
    }
}
