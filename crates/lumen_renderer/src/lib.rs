//! Lumen Renderer - offline recursive ray tracing.
//!
//! A Whitted-style CPU ray tracer:
//! - Spheres shaded by pluggable effects (constant color, mirror, Fresnel)
//! - Cube map environment as the hit of last resort
//! - Bounded recursion with a defined terminal color
//! - Thin-lens depth of field and 4-point rotated-grid supersampling
//! - Row-parallel rendering with rayon

mod cube_map;
mod effect;
mod error;
mod frame;
mod output;
mod scene;
mod settings;
mod sphere;
mod state;
mod tracer;

pub use cube_map::{face_coordinates, CubeFace, CubeMap};
pub use effect::{ior, Color, Effect};
pub use error::{RenderError, RenderResult};
pub use frame::{color_to_rgb8, FrameBuffer};
pub use output::{save_frame, unique_path, MAX_SAVE_ATTEMPTS};
pub use scene::SceneObject;
pub use settings::RenderSettings;
pub use sphere::{Sphere, MIN_HIT_DISTANCE};
pub use state::{RayTracerState, DEFAULT_MAX_DEPTH};
pub use tracer::{RayTracer, Screen, SUBPIXEL_OFFSETS};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Ray, Vec3};
