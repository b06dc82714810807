use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Offline recursive ray tracer with depth of field")]
pub struct Args {
    /// JSON scene file; the built-in demo scene is used when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Directory with posx.tga, negx.tga, posy.tga, negy.tga, posz.tga, negz.tga
    #[arg(long)]
    pub cubemap: Option<PathBuf>,

    /// Output base name, saved as <base>NNNN.tga
    #[arg(short, long, default_value = "render")]
    pub output: String,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Aperture samples per pixel (each fires 4 rays)
    #[arg(long, short = 'r')]
    pub rays: Option<u32>,

    /// Seed for reproducible depth-of-field jitter
    #[arg(long)]
    pub seed: Option<u64>,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}
