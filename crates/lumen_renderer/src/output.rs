//! Writing finished frames to disk without clobbering earlier renders.

use std::path::{Path, PathBuf};

use crate::{FrameBuffer, RenderError, RenderResult};
use lumen_core::tga;

/// Number of numbered file names probed before giving up.
pub const MAX_SAVE_ATTEMPTS: u32 = 10_000;

/// Find the first `{base}NNNN.tga` in `dir` that does not exist yet.
pub fn unique_path(dir: &Path, base: &str, attempts: u32) -> RenderResult<PathBuf> {
    for i in 0..attempts {
        let candidate = dir.join(format!("{base}{i:04}.tga"));
        if !candidate.try_exists()? {
            return Ok(candidate);
        }
    }

    Err(RenderError::NamesExhausted {
        base: base.to_string(),
        attempts,
    })
}

/// Save a frame as a 24-bit TGA under the first free numbered name.
///
/// Returns the path that was written.
pub fn save_frame(frame: &FrameBuffer, dir: &Path, base: &str) -> RenderResult<PathBuf> {
    let path = unique_path(dir, base, MAX_SAVE_ATTEMPTS)?;
    tga::encode(&path, frame.width, frame.height, 3, &frame.to_rgb8())?;
    log::info!("Saved {}", path.display());
    Ok(path)
}
