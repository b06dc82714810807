use crate::Vec3;

/// Distance (in units of the parent direction) that spawned rays are pushed
/// off the surface they start on.
pub const SPAWN_EPSILON: f32 = 1e-6;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not required to be normalized. Secondary rays are
/// created from a hit with [`Ray::spawn`] or [`Ray::spawn_past`], which
/// bias the new origin along this ray's own direction so the child does not
/// immediately re-hit the surface it leaves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Spawn a child ray that starts just before the hit at `t`.
    ///
    /// The origin sits at `t - SPAWN_EPSILON` along this ray. `direction` is
    /// used as given (no renormalization).
    #[inline]
    pub fn spawn(&self, t: f32, direction: Vec3) -> Ray {
        Ray::new(self.at(t - SPAWN_EPSILON), direction)
    }

    /// Spawn a child ray that starts just past the hit at `t`.
    ///
    /// The origin sits at `t + SPAWN_EPSILON` along this ray.
    #[inline]
    pub fn spawn_past(&self, t: f32, direction: Vec3) -> Ray {
        Ray::new(self.at(t + SPAWN_EPSILON), direction)
    }
}
