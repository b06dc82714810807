//! Material effects: the shading rule applied at a hit point.

use crate::RayTracerState;
use lumen_math::{reflect, refract, schlick, Ray, Vec3};
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Refractive indices of common media.
pub mod ior {
    pub const AIR: f32 = 1.000293;
    pub const CARBON_DIOXIDE: f32 = 1.00045;
    pub const WATER: f32 = 1.3330;
    pub const ETHANOL: f32 = 1.361;
    pub const PYREX: f32 = 1.470;
    pub const DIAMOND: f32 = 2.419;
}

/// How a surface is shaded when a ray hits it.
///
/// Effects hold only fixed parameters and are shared read-only between
/// scene objects while rendering. `Reflective` and `Fresnel` trace further
/// rays through the renderer state, one recursion level per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Constant color, terminates the recursion.
    Color(Color),
    /// Perfect mirror.
    Reflective,
    /// Schlick-weighted blend of a refracted and a reflected ray.
    Fresnel { eta_from: f32, eta_to: f32 },
}

impl Effect {
    /// Create a constant color effect.
    pub fn color(color: Color) -> Self {
        Effect::Color(color)
    }

    /// Create a mirror effect.
    pub fn reflective() -> Self {
        Effect::Reflective
    }

    /// Create a Fresnel effect for a boundary between two media.
    ///
    /// - `eta_from`: Index of refraction outside the object (1.0 = air)
    /// - `eta_to`: Index of refraction inside the object (1.5 = glass, 2.4 = diamond)
    pub fn fresnel(eta_from: f32, eta_to: f32) -> Self {
        Effect::Fresnel { eta_from, eta_to }
    }

    /// Shade the hit of `ray` at parameter `t` with surface `normal`.
    ///
    /// `normal` is the unit outward normal. `depth` is the recursion level
    /// of `ray`; child rays are traced at `depth + 1`.
    pub fn shade(
        &self,
        ray: &Ray,
        t: f32,
        normal: Vec3,
        state: &RayTracerState,
        depth: u32,
    ) -> Color {
        match *self {
            Effect::Color(color) => color,
            Effect::Reflective => {
                let mirrored = ray.spawn(t, reflect(ray.direction(), normal));
                state.trace(&mirrored, depth + 1)
            }
            Effect::Fresnel { eta_from, eta_to } => {
                shade_fresnel(ray, t, normal, eta_from, eta_to, state, depth)
            }
        }
    }
}

fn shade_fresnel(
    ray: &Ray,
    t: f32,
    normal: Vec3,
    eta_from: f32,
    eta_to: f32,
    state: &RayTracerState,
    depth: u32,
) -> Color {
    let v = ray.direction().normalize_or_zero();
    let cos_v = v.dot(normal);

    // Entering when travelling against the outward normal
    let (n, eta_a, eta_b, cosine) = if cos_v < 0.0 {
        (normal, eta_from, eta_to, -cos_v)
    } else {
        (-normal, eta_to, eta_from, cos_v)
    };

    let fresnel = schlick(cosine, eta_a, eta_b);
    let (refracted, reflected) = fresnel_children(ray, t, v, n, eta_a / eta_b);
    let reflected = state.trace(&reflected, depth + 1);

    match refracted {
        Some(refracted) => state.trace(&refracted, depth + 1).lerp(reflected, fresnel),
        // Total internal reflection
        None => reflected,
    }
}

/// Child rays of a Fresnel hit as `(refracted, reflected)`.
///
/// The refracted ray starts just before the hit and the reflected ray just
/// past it. `n` faces the incident side and `eta` is the incident over
/// transmitted index ratio.
fn fresnel_children(ray: &Ray, t: f32, v: Vec3, n: Vec3, eta: f32) -> (Option<Ray>, Ray) {
    let refracted = refract(v, n, eta).map(|direction| ray.spawn(t, direction));
    let reflected = ray.spawn_past(t, reflect(v, n));
    (refracted, reflected)
}
