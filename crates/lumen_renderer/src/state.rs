//! Ray tracer state: the scene and the recursive trace entry point.

use crate::{Color, SceneObject};
use lumen_math::{Ray, Vec3};

/// Default bound on the recursion depth of secondary rays.
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// The scene being rendered plus the fixed camera position.
///
/// Objects are only added while the scene is being set up; tracing takes
/// `&self`, so a state can be shared between render threads.
#[derive(Debug, Clone)]
pub struct RayTracerState {
    scene: Vec<SceneObject>,
    camera_position: Vec3,
    /// Deepest recursion level that is still traced
    max_depth: u32,
    /// Returned when a ray hits nothing at all
    background: Color,
    /// Returned when a ray is beyond `max_depth`
    terminal_color: Color,
}

impl RayTracerState {
    /// Create an empty scene viewed from `camera_position`.
    pub fn new(camera_position: Vec3) -> Self {
        Self {
            scene: Vec::new(),
            camera_position,
            max_depth: DEFAULT_MAX_DEPTH,
            background: Color::ZERO,
            terminal_color: Color::ZERO,
        }
    }

    /// Set the recursion bound and the two fallback colors.
    pub fn with_limits(mut self, max_depth: u32, background: Color, terminal_color: Color) -> Self {
        self.max_depth = max_depth;
        self.background = background;
        self.terminal_color = terminal_color;
        self
    }

    /// Add an object to the scene.
    ///
    /// Insertion order decides which object wins when two hits are at the
    /// same distance (the earlier one).
    pub fn add_scene_object(&mut self, object: impl Into<SceneObject>) {
        self.scene.push(object.into());
    }

    pub fn scene(&self) -> &[SceneObject] {
        &self.scene
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Whether the scene holds an environment object.
    pub fn has_environment(&self) -> bool {
        self.scene.iter().any(SceneObject::is_environment)
    }

    /// Trace a primary ray and return the color it sees.
    pub fn trace_ray(&self, ray: &Ray) -> Color {
        self.trace(ray, 0)
    }

    /// Trace a ray at recursion level `depth`.
    ///
    /// Beyond `max_depth` the terminal color is returned without looking at
    /// the scene.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        if depth > self.max_depth {
            return self.terminal_color;
        }

        match self.nearest_hit(ray) {
            Some((object, t)) => object.shade(ray, t, self, depth),
            None => self.background,
        }
    }

    /// Linear scan for the closest hit. Ties go to the earlier object.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(&SceneObject, f32)> {
        let mut nearest: Option<(&SceneObject, f32)> = None;

        for object in &self.scene {
            if let Some(t) = object.intersect(ray) {
                if nearest.map_or(true, |(_, closest)| t < closest) {
                    nearest = Some((object, t));
                }
            }
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CubeMap, Effect, Sphere};

    const SKY: Color = Vec3::new(0.3, 0.6, 0.9);

    fn red_sphere() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Effect::color(Color::X))
    }

    #[test]
    fn test_hit_returns_effect_color() {
        let mut state = RayTracerState::new(Vec3::ZERO);
        state.add_scene_object(red_sphere());

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(state.trace_ray(&ray), Color::X);
    }

    #[test]
    fn test_miss_without_environment_is_background() {
        let background = Color::new(0.1, 0.1, 0.1);
        let mut state = RayTracerState::new(Vec3::ZERO).with_limits(4, background, Color::ZERO);
        state.add_scene_object(red_sphere());

        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(state.trace_ray(&ray), background);
    }

    #[test]
    fn test_miss_samples_environment() {
        let mut state = RayTracerState::new(Vec3::ZERO);
        state.add_scene_object(CubeMap::uniform(SKY));
        state.add_scene_object(red_sphere());

        for d in [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::new(0.3, -1.0, 0.2), Vec3::Z] {
            let ray = Ray::new(Vec3::ZERO, d);
            assert_eq!(state.trace_ray(&ray), SKY, "direction {d}");
        }
    }

    #[test]
    fn test_environment_never_masks_geometry() {
        let mut state = RayTracerState::new(Vec3::ZERO);
        // Environment first in scan order
        state.add_scene_object(CubeMap::uniform(SKY));
        state.add_scene_object(red_sphere());

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(state.trace_ray(&ray), Color::X);
    }

    #[test]
    fn test_nearest_object_wins() {
        let mut state = RayTracerState::new(Vec3::ZERO);
        state.add_scene_object(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
            Effect::color(Color::Y),
        ));
        state.add_scene_object(red_sphere());

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let (_, t) = state.nearest_hit(&ray).unwrap();
        assert!((t - 4.0).abs() < 1e-4);
        assert_eq!(state.trace_ray(&ray), Color::X);
    }

    #[test]
    fn test_ties_go_to_first_inserted() {
        let mut state = RayTracerState::new(Vec3::ZERO);
        state.add_scene_object(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Effect::color(Color::Y),
        ));
        state.add_scene_object(red_sphere());

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(state.trace_ray(&ray), Color::Y);
    }

    #[test]
    fn test_mirror_hallway_terminates() {
        let terminal = Color::new(0.25, 0.5, 0.75);
        let mut state = RayTracerState::new(Vec3::ZERO).with_limits(8, Color::ZERO, terminal);
        let mirror = std::sync::Arc::new(Effect::reflective());
        state.add_scene_object(CubeMap::uniform(SKY));
        state.add_scene_object(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, mirror.clone()));
        state.add_scene_object(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, mirror));

        // Bounces straight back and forth between the two mirrors
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let color = state.trace_ray(&ray);

        assert!(color.is_finite());
        assert!(color.min_element() >= 0.0 && color.max_element() <= 1.0);
        assert_eq!(color, terminal);
    }

    #[test]
    fn test_depth_beyond_limit_skips_scene() {
        let mut state = RayTracerState::new(Vec3::ZERO).with_limits(2, Color::ONE, Color::ZERO);
        state.add_scene_object(red_sphere());

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(state.trace(&ray, 2), Color::X);
        assert_eq!(state.trace(&ray, 3), Color::ZERO);
    }
}
