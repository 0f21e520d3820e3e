use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable on the command line
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

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "Render a JSON scene with a recursive Whitted-style ray tracer")]
pub struct Args {
    /// Scene description (JSON array of camera, sphere, plane and light objects)
    pub scene: String,

    /// Output file path (.png, or .ppm for binary P6)
    #[arg(short, long, default_value = "output.png")]
    pub output: String,

    /// Image width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Number of jittered samples per pixel
    #[arg(long, short = 's', default_value = "1")]
    pub samples_per_pixel: u32,

    /// Maximum recursion depth for reflected and refracted rays
    #[arg(long, default_value = "7")]
    pub max_depth: u32,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub debug_level: LogLevel,
}
