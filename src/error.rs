//! Error types for Glint

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlintError {
    /// A zero-length (or non-finite) vector was given where a direction is required.
    #[error("Degenerate vector: cannot normalize a zero-length vector")]
    DegenerateVector,

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("Scene format error: {0}")]
    SceneFormat(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedOutput(String),
}

pub type Result<T> = std::result::Result<T, GlintError>;
