//! Lumen Core - image I/O and textures for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **TGA codec**: `tga::decode` / `tga::encode` over row-major,
//!   bottom-to-top RGB(A) byte buffers
//! - **Textures**: `Texture`, float RGB texels with nearest-neighbour lookup
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::Texture;
//!
//! let sky = Texture::load("cubemap/posy.tga")?;
//! let texel = sky.texel(0.5, 0.5);
//! ```

pub mod texture;
pub mod tga;

// Re-export commonly used types
pub use texture::Texture;
pub use tga::{TgaError, TgaImage, TgaResult};
