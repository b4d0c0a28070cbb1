//! PNG loading and saving with path-aware errors

use crate::io::error::{AlgorithmError, Result, file_system_error};
use image::RgbImage;
use std::path::Path;

/// Load an image as 8-bit RGB, dropping any alpha channel
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    image::open(path)
        .map(|img| img.to_rgb8())
        .map_err(|e| AlgorithmError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Save an image, creating its parent directory if needed
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        ensure_dir(parent)?;
    }

    image
        .save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Create a directory and its parents if they don't exist
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|e| file_system_error(dir, "create directory", e))
}
