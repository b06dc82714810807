//! Scene objects: the closed set of things a ray can hit.

use crate::{Color, CubeMap, RayTracerState, Sphere};
use lumen_math::Ray;

/// A renderable entity in the scene.
#[derive(Debug, Clone)]
pub enum SceneObject {
    Sphere(Sphere),
    /// Background environment, hit when nothing else is.
    Environment(CubeMap),
}

impl SceneObject {
    /// Parametric distance of the nearest hit, `None` on a miss.
    ///
    /// The environment always reports `f32::MAX`.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            SceneObject::Sphere(sphere) => sphere.intersect(ray),
            SceneObject::Environment(cube_map) => Some(cube_map.intersect(ray)),
        }
    }

    /// Shade the hit of `ray` at `t`.
    ///
    /// Spheres dispatch to their effect; the environment samples its
    /// textures directly.
    pub fn shade(&self, ray: &Ray, t: f32, state: &RayTracerState, depth: u32) -> Color {
        match self {
            SceneObject::Sphere(sphere) => {
                let normal = sphere.normal_at(ray.at(t));
                sphere.effect().shade(ray, t, normal, state, depth)
            }
            SceneObject::Environment(cube_map) => cube_map.sample(ray.direction()),
        }
    }

    pub fn is_environment(&self) -> bool {
        matches!(self, SceneObject::Environment(_))
    }
}

impl From<Sphere> for SceneObject {
    fn from(sphere: Sphere) -> Self {
        SceneObject::Sphere(sphere)
    }
}

impl From<CubeMap> for SceneObject {
    fn from(cube_map: CubeMap) -> Self {
        SceneObject::Environment(cube_map)
    }
}
