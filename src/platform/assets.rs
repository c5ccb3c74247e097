// SplashForge - platform/assets.rs
//
// Shared asset services for the emitters: image dimension probing, source
// icon loading, scaled-PNG writing, and path-context-preserving file I/O.

use crate::core::model::ImageDims;
use crate::util::error::{EmitError, InspectError};
use image::imageops::FilterType;
use std::path::Path;

/// Probe an image file for its pixel dimensions.
///
/// Reads only as much of the file as format headers require; a path that
/// does not exist or is not a decodable raster image fails with
/// `Unreadable`.  Pure read, no side effects.
pub fn image_dimensions(path: &Path) -> Result<ImageDims, InspectError> {
    let (width, height) =
        image::image_dimensions(path).map_err(|e| InspectError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %path.display(), width, height, "Inspected image");
    Ok(ImageDims { width, height })
}

/// Load a source icon and convert it to RGBA8 for scaling.
pub fn load_rgba(path: &Path) -> Result<image::RgbaImage, EmitError> {
    let img = image::open(path).map_err(|e| EmitError::ImageRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Resize `source` and write it as a PNG.  Triangle filtering is a good
/// quality/speed tradeoff for logo-sized art.
pub fn write_scaled_png(
    source: &image::RgbaImage,
    dest: &Path,
    width: u32,
    height: u32,
) -> Result<(), EmitError> {
    let scaled = image::imageops::resize(source, width, height, FilterType::Triangle);
    scaled
        .save_with_format(dest, image::ImageFormat::Png)
        .map_err(|e| EmitError::ImageEncode {
            path: dest.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(dest = %dest.display(), width, height, "Wrote scaled PNG");
    Ok(())
}

/// Convert a dp measure to pixels at the given scale factor, rounding to
/// the nearest pixel and never below one.
pub fn scaled_px(dp: f64, factor: f64) -> u32 {
    (dp * factor).round().max(1.0) as u32
}

/// Create a directory and any missing parents.  Idempotent.
pub fn ensure_dir(path: &Path) -> Result<(), EmitError> {
    std::fs::create_dir_all(path).map_err(|e| EmitError::AssetWrite {
        path: path.to_path_buf(),
        operation: "create directory",
        source: e,
    })
}

/// Write a text asset, replacing any existing file.
pub fn write_text(path: &Path, content: &str) -> Result<(), EmitError> {
    std::fs::write(path, content).map_err(|e| EmitError::AssetWrite {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })
}

// =============================================================================
// Tests
// =============================================================================
