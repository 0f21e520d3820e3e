//! # Output Module
//!
//! Writes a rendered framebuffer to disk. The format follows the file
//! extension:
//! - `.png` for lossless compressed output
//! - `.ppm` for binary (P6) portable pixmaps
//!
//! Pixels are already clamped 8-bit RGB, so no tone mapping happens here.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use log::{debug, info};

use crate::error::{GlintError, Result};
use crate::render::Framebuffer;

/// Pick the output format from the path's extension.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => Ok(ImageFormat::Png),
        "ppm" => Ok(ImageFormat::Pnm),
        _ => Err(GlintError::UnsupportedOutput(format!(
            "'{}' (only .png and .ppm are supported)",
            path.display()
        ))),
    }
}

/// Save the framebuffer to `output_path`.
///
/// # Errors
///
/// [`GlintError::UnsupportedOutput`] for unknown extensions, otherwise any
/// encoding or I/O failure from the `image` crate.
pub fn save_image(image: &Framebuffer, output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    let format = output_format(path)?;
    debug!(
        "Encoding {}x{} image as {:?}",
        image.width(),
        image.height(),
        format
    );

    match format {
        ImageFormat::Pnm => {
            let writer = BufWriter::new(File::create(path)?);
            PnmEncoder::new(writer)
                .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
                .write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgb8)?;
        }
        _ => image.save_with_format(path, format)?,
    }
    info!("Image saved as {}", path.display());
    Ok(())
}
