//! The ray tracer orchestrator.
//!
//! Owns the frame buffer and the scene state, defines the virtual screen,
//! and runs the per-pixel sampling loop:
//! - `num_rays` aperture samples per pixel (thin-lens depth of field)
//! - 4 fixed rotated-grid sub-pixel rays per aperture sample
//! - rows rendered in parallel with rayon

use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;

use crate::output::save_frame;
use crate::{Color, FrameBuffer, RayTracerState, RenderResult, RenderSettings, SceneObject};
use lumen_math::{Ray, Vec3};

/// Sub-pixel offsets fired for every aperture sample.
pub const SUBPIXEL_OFFSETS: [(f32, f32); 4] =
    [(0.25, 0.25), (-0.25, -0.25), (-0.25, 0.25), (0.25, -0.25)];

/// The virtual screen primary rays are projected through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Screen {
    /// Unit-high screen, as wide as the aspect ratio.
    pub fn from_aspect(aspect: f32) -> Self {
        Self {
            left: -aspect,
            right: aspect,
            top: 1.0,
            bottom: -1.0,
        }
    }
}

/// Main entry point for ray tracing a scene and saving the result.
pub struct RayTracer {
    frame: FrameBuffer,
    state: RayTracerState,
    settings: RenderSettings,
    screen: Screen,
}

impl RayTracer {
    /// Create a ray tracer with default settings apart from the arguments.
    pub fn new(
        width: u32,
        height: u32,
        num_rays: u32,
        focus_length: f32,
        aperture_radius: f32,
    ) -> Self {
        Self::with_settings(
            RenderSettings::default()
                .with_resolution(width, height)
                .with_lens(num_rays, focus_length, aperture_radius),
        )
    }

    /// Create a ray tracer from full render settings.
    pub fn with_settings(settings: RenderSettings) -> Self {
        let state = RayTracerState::new(settings.camera_position).with_limits(
            settings.max_depth,
            settings.background,
            settings.terminal_color,
        );

        Self {
            frame: FrameBuffer::new(settings.width, settings.height),
            screen: Screen::from_aspect(settings.aspect()),
            state,
            settings,
        }
    }

    /// Add an object to the scene.
    pub fn add_scene_object(&mut self, object: impl Into<SceneObject>) {
        self.state.add_scene_object(object);
    }

    pub fn state(&self) -> &RayTracerState {
        &self.state
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The most recently rendered frame (black before `render`).
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Render the current scene into the frame buffer.
    pub fn render(&mut self) {
        if !self.state.has_environment() {
            log::warn!("Scene has no environment, misses use the background color");
        }

        log::info!(
            "Rendering {}x{} @ {} rays/pixel ({} objects)",
            self.settings.width,
            self.settings.height,
            self.settings.num_rays * SUBPIXEL_OFFSETS.len() as u32,
            self.state.scene().len()
        );

        let start = Instant::now();
        self.frame = self.render_frame();
        log::info!("Rendered in {:?}", start.elapsed());
    }

    /// Render every row in parallel into a fresh frame buffer.
    fn render_frame(&self) -> FrameBuffer {
        let mut frame = FrameBuffer::new(self.settings.width, self.settings.height);

        frame.par_rows_mut().for_each(|(j, row)| {
            let mut rng = self.row_rng(j);
            for (i, pixel) in row.iter_mut().enumerate() {
                *pixel = self.render_pixel(i as u32, j, &mut rng);
            }
        });

        frame
    }

    /// Random source for one row of the image.
    fn row_rng(&self, row: u32) -> StdRng {
        match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(row as u64)),
            None => StdRng::from_entropy(),
        }
    }

    /// Render a single pixel; `j` counts rows from the bottom.
    ///
    /// The random source only drives the aperture jitter.
    pub fn render_pixel(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Color {
        let samples = self.settings.num_rays.max(1);
        let radius = self.settings.aperture_radius;
        let mut pixel_color = Color::ZERO;

        for _ in 0..samples {
            let du = radius * rng.gen::<f32>();
            let dv = radius * rng.gen::<f32>();

            let mut sample = Color::ZERO;
            for offset in SUBPIXEL_OFFSETS {
                let ray = self.primary_ray(i, j, offset, (du, dv));
                sample += self.state.trace_ray(&ray);
            }
            pixel_color += sample * 0.25;
        }

        pixel_color / samples as f32
    }

    /// Build the primary ray for pixel `(i, j)`.
    ///
    /// The pixel is projected onto the screen at depth -1. All unjittered
    /// rays pass through the camera position; the aperture offset moves the
    /// origin while the ray stays aimed at the focus point.
    pub fn primary_ray(&self, i: u32, j: u32, offset: (f32, f32), aperture: (f32, f32)) -> Ray {
        let screen = &self.screen;
        let width = self.settings.width as f32;
        let height = self.settings.height as f32;

        let x = (i as f32 + offset.0) * (screen.right - screen.left) / width + screen.left;
        let y = (j as f32 + offset.1) * (screen.top - screen.bottom) / height + screen.bottom;
        let lens = Vec3::new(x, y, -1.0);

        let start = self.state.camera_position() - lens;
        let focus = start + self.settings.focus_length * lens;
        let origin = start + Vec3::new(aperture.0, aperture.1, 0.0);

        Ray::new(origin, focus - origin)
    }

    /// Save the frame as `{base}NNNN.tga` using the first free number.
    pub fn save(&self, base: &str) -> RenderResult<PathBuf> {
        self.save_in(Path::new(""), base)
    }

    /// Like [`RayTracer::save`], relative to `dir`.
    pub fn save_in(&self, dir: &Path, base: &str) -> RenderResult<PathBuf> {
        save_frame(&self.frame, dir, base)
    }
}
