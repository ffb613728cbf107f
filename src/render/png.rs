//! PNG output for rendered previews.

use std::path::Path;

use image::RgbImage;

use crate::error::{BrickError, Result};

/// Write a preview image to a PNG file.
///
/// The parent directory is created when missing.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BrickError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| BrickError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}
