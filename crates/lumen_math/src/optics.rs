//! Reflection and refraction helpers shared by the shading code.

use crate::Vec3;

/// Reflect a vector about a normal.
///
/// `n` must be normalized; `v` may have any length and the result keeps it.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a normalized incident vector through a surface.
///
/// `n` is the unit normal on the incident side (`v.dot(n) <= 0`) and `eta`
/// is the ratio of refractive indices (from / to). Returns `None` when the
/// discriminant is negative, i.e. on total internal reflection.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Option<Vec3> {
    let cos_i = n.dot(v);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some(eta * v - (eta * cos_i + k.sqrt()) * n)
}

/// Schlick's approximation for the Fresnel reflectance.
///
/// `cosine` is the cosine between the incident ray and the surface normal,
/// `eta_a`/`eta_b` the refractive indices on either side.
#[inline]
pub fn schlick(cosine: f32, eta_a: f32, eta_b: f32) -> f32 {
    let r0 = ((eta_b - eta_a) / (eta_b + eta_a)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
