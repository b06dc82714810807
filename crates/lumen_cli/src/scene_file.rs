//! Scene descriptions: the built-in demo scene and JSON scene files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lumen_math::Vec3;
use lumen_renderer::{ior, CubeMap, Effect, RayTracer, RenderSettings, Sphere};
use serde::{Deserialize, Serialize};

/// A scene as read from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub settings: RenderSettings,
    pub objects: Vec<ObjectDescription>,
    /// Directory holding the six cube map faces
    pub cubemap: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectDescription {
    Sphere {
        center: Vec3,
        radius: f32,
        effect: Effect,
    },
}

impl SceneDescription {
    /// Read a scene from a JSON file.
    ///
    /// A relative `cubemap` directory is resolved against the file's folder.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene {}", path.display()))?;
        let mut scene: SceneDescription = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse scene {}", path.display()))?;

        if let (Some(dir), Some(parent)) = (scene.cubemap.as_mut(), path.parent()) {
            if dir.is_relative() {
                *dir = parent.join(&*dir);
            }
        }

        Ok(scene)
    }

    /// Reflective and Fresnel spheres over an optional cube map.
    pub fn demo() -> Self {
        let diamond = Effect::fresnel(ior::AIR, ior::DIAMOND);
        let sphere = |center: Vec3, effect: Effect| ObjectDescription::Sphere {
            center,
            radius: 2.0,
            effect,
        };

        Self {
            settings: RenderSettings::default(),
            objects: vec![
                sphere(Vec3::new(-3.0, 0.0, 6.0), Effect::reflective()),
                sphere(Vec3::new(3.0, 0.0, 3.0), diamond),
                sphere(Vec3::new(0.0, 3.0, 2.0), diamond),
            ],
            cubemap: None,
        }
    }

    /// Build a ray tracer holding this scene.
    pub fn build(&self) -> Result<RayTracer> {
        let mut rt = RayTracer::with_settings(self.settings.clone());

        for object in &self.objects {
            match object {
                ObjectDescription::Sphere {
                    center,
                    radius,
                    effect,
                } => rt.add_scene_object(Sphere::new(*center, *radius, *effect)),
            }
        }

        if let Some(dir) = &self.cubemap {
            let cube_map = CubeMap::load_dir(dir)
                .with_context(|| format!("Failed to load cube map from {}", dir.display()))?;
            rt.add_scene_object(cube_map);
        }

        log::debug!("Scene has {} objects", rt.state().scene().len());
        Ok(rt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_renderer::SceneObject;

    const SCENE: &str = r#"{
        "settings": { "width": 8, "height": 6, "num_rays": 2, "seed": 3 },
        "objects": [
            { "sphere": { "center": [0, 0, -5], "radius": 1, "effect": { "color": [1, 0, 0] } } },
            { "sphere": { "center": [2, 0, -5], "radius": 0.5, "effect": "reflective" } },
            { "sphere": { "center": [-2, 0, -5], "radius": 0.5,
                          "effect": { "fresnel": { "eta_from": 1.0, "eta_to": 1.5 } } } }
        ]
    }"#;

    #[test]
    fn test_parse_scene_json() {
        let scene: SceneDescription = serde_json::from_str(SCENE).unwrap();

        assert_eq!(scene.settings.width, 8);
        assert_eq!(scene.settings.seed, Some(3));
        // Unlisted settings keep their defaults
        assert_eq!(scene.settings.focus_length, 7.0);
        assert_eq!(scene.objects.len(), 3);

        let ObjectDescription::Sphere { effect, .. } = &scene.objects[2];
        assert_eq!(*effect, Effect::fresnel(1.0, 1.5));
    }

    #[test]
    fn test_build_scene() {
        let scene: SceneDescription = serde_json::from_str(SCENE).unwrap();
        let rt = scene.build().unwrap();

        assert_eq!(rt.state().scene().len(), 3);
        assert!(matches!(rt.state().scene()[0], SceneObject::Sphere(_)));
        assert!(!rt.state().has_environment());
    }

    #[test]
    fn test_load_resolves_cubemap_relative_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, r#"{ "cubemap": "sky" }"#).unwrap();

        let scene = SceneDescription::load(&path).unwrap();
        assert_eq!(scene.cubemap, Some(dir.path().join("sky")));
    }

    #[test]
    fn test_missing_cubemap_is_an_error() {
        let scene = SceneDescription {
            cubemap: Some(PathBuf::from("/nonexistent/cubemap")),
            ..SceneDescription::default()
        };
        assert!(scene.build().is_err());
    }

    #[test]
    fn test_demo_scene() {
        let rt = SceneDescription::demo().build().unwrap();
        assert_eq!(rt.state().scene().len(), 3);
        assert_eq!(rt.settings().width, 800);
        assert_eq!(rt.settings().num_rays, 100);
    }
}
