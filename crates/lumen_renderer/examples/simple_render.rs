//! Simple ray tracer example.
//!
//! Renders a mirror, a glass ball and a colored ball in front of a
//! two-tone cube map and saves the result as TGA.

use lumen_core::Texture;
use lumen_renderer::{ior, Color, CubeMap, Effect, RayTracer, RenderSettings, Sphere, Vec3};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings = RenderSettings::default()
        .with_resolution(320, 240)
        .with_lens(8, 7.0, 0.003)
        .with_seed(1);
    let mut rt = RayTracer::with_settings(settings);

    rt.add_scene_object(Sphere::new(
        Vec3::new(-3.0, 0.0, 4.0),
        2.0,
        Effect::reflective(),
    ));
    rt.add_scene_object(Sphere::new(
        Vec3::new(3.0, 0.0, 3.0),
        2.0,
        Effect::fresnel(ior::AIR, ior::WATER),
    ));
    rt.add_scene_object(Sphere::new(
        Vec3::new(0.0, -2.5, 0.0),
        1.0,
        Effect::color(Color::new(0.9, 0.3, 0.1)),
    ));

    // Bright sky above, dark ground below, grey horizon
    let sky = Texture::solid(Color::new(0.5, 0.7, 1.0));
    let ground = Texture::solid(Color::new(0.2, 0.2, 0.2));
    let horizon = Texture::solid(Color::splat(0.6));
    rt.add_scene_object(CubeMap::from_faces([
        horizon.clone(),
        horizon.clone(),
        sky,
        ground,
        horizon.clone(),
        horizon,
    ]));

    rt.render();

    match rt.save("simple_render") {
        Ok(path) => println!("Saved to {}", path.display()),
        Err(e) => eprintln!("Failed to save image: {e}"),
    }
}
