//! Image loading and resizing.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::error::{BrickError, Result};

/// Decode an image file to 8-bit sRGB, dropping any alpha channel.
pub fn load(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| BrickError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;
    Ok(img.to_rgb8())
}

/// Resample to exactly `width` x `height` with a Lanczos filter.
///
/// Returns the input unchanged when it already has the requested size.
pub fn resize(image: &RgbImage, width: u32, height: u32) -> Cow<'_, RgbImage> {
    if image.dimensions() == (width, height) {
        Cow::Borrowed(image)
    } else {
        Cow::Owned(imageops::resize(image, width, height, FilterType::Lanczos3))
    }
}

/// `<dir>/<stem><suffix>.png` next to a source image.
pub fn sibling_png(source: &Path, dir: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mosaic");
    dir.join(format!("{}{}.png", stem, suffix))
}
