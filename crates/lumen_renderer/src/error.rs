//! Errors surfaced by the renderer.

use lumen_core::TgaError;
use thiserror::Error;

/// Errors that can occur while setting up a scene or saving a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unable to find unique filename for {base}NNNN.tga ({attempts} names taken)")]
    NamesExhausted { base: String, attempts: u32 },

    #[error("Image error: {0}")]
    Image(#[from] TgaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
