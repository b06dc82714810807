//! Command line entry point: build a scene, render it, save a TGA.

mod cli;
mod scene_file;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use cli::Args;
use scene_file::SceneDescription;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    let mut scene = match &args.scene {
        Some(path) => SceneDescription::load(path)?,
        None => SceneDescription::demo(),
    };
    apply_overrides(&mut scene, &args);

    let mut rt = scene.build()?;
    rt.render();

    let path = rt
        .save(&args.output)
        .with_context(|| format!("Failed to save render as {}", args.output))?;
    log::info!("Image saved to {}", path.display());

    Ok(())
}

/// Initialize the logger with the specified level
fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Command line values win over the scene file.
fn apply_overrides(scene: &mut SceneDescription, args: &Args) {
    let settings = &mut scene.settings;
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(rays) = args.rays {
        settings.num_rays = rays;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(dir) = &args.cubemap {
        scene.cubemap = Some(dir.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_scene_values() {
        let args = Args::parse_from(["lumen", "--width", "32", "--seed", "9", "--cubemap", "sky"]);
        let mut scene = SceneDescription::demo();
        apply_overrides(&mut scene, &args);

        assert_eq!(scene.settings.width, 32);
        assert_eq!(scene.settings.height, 600);
        assert_eq!(scene.settings.seed, Some(9));
        assert_eq!(scene.cubemap, Some(std::path::PathBuf::from("sky")));
    }
}
