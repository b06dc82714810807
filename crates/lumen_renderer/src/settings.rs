//! Render settings.

use crate::state::DEFAULT_MAX_DEPTH;
use crate::Color;
use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

/// Render configuration.
///
/// Every field has a default, so a settings file only needs to list what it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Aperture samples per pixel, each fires 4 sub-pixel rays
    pub num_rays: u32,
    /// Distance scale of the plane in focus
    pub focus_length: f32,
    /// Largest aperture offset; 0 disables depth of field
    pub aperture_radius: f32,
    pub camera_position: Vec3,
    /// Maximum recursion depth of secondary rays
    pub max_depth: u32,
    /// Color of rays that hit nothing
    pub background: Color,
    /// Color returned once `max_depth` is exceeded
    pub terminal_color: Color,
    /// Seed for the aperture jitter; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            num_rays: 100,
            focus_length: 7.0,
            aperture_radius: 0.003,
            camera_position: Vec3::new(0.0, 0.0, 10.0),
            max_depth: DEFAULT_MAX_DEPTH,
            background: Color::ZERO,
            terminal_color: Color::ZERO,
            seed: None,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set sampling and lens settings.
    pub fn with_lens(mut self, num_rays: u32, focus_length: f32, aperture_radius: f32) -> Self {
        self.num_rays = num_rays;
        self.focus_length = focus_length;
        self.aperture_radius = aperture_radius;
        self
    }

    /// Set camera position.
    pub fn with_camera(mut self, camera_position: Vec3) -> Self {
        self.camera_position = camera_position;
        self
    }

    /// Seed the aperture jitter for reproducible renders.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
