//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::Effect;
use lumen_math::{Interval, Ray, Vec3};

/// Roots closer than this are treated as the surface the ray starts on.
pub const MIN_HIT_DISTANCE: f32 = 1e-4;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    effect: Arc<Effect>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The effect may be shared between several spheres.
    pub fn new(center: Vec3, radius: f32, effect: impl Into<Arc<Effect>>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            effect: effect.into(),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    /// Smallest parametric distance `t >= MIN_HIT_DISTANCE` at which `ray`
    /// hits the sphere, or `None` on a miss.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        if a == 0.0 {
            return None;
        }
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let range = Interval::new(MIN_HIT_DISTANCE, f32::INFINITY);

        // Find the nearest root in the acceptable range
        let near = (h - sqrtd) / a;
        if range.contains(near) {
            return Some(near);
        }
        let far = (h + sqrtd) / a;
        range.contains(far).then_some(far)
    }

    /// Unit outward normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}
