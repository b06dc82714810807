// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod optics;
mod ray;

pub use interval::Interval;
pub use optics::{reflect, refract, schlick};
pub use ray::{Ray, SPAWN_EPSILON};
