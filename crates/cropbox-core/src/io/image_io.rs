use std::path::Path;

use image::DynamicImage;
use tracing::info;

use crate::consts::SOURCE_EXTENSIONS;
use crate::error::{CropboxError, Result};
use crate::geometry::Size;

/// Decode the source image. The returned image is never modified; crops are
/// always taken from it at full resolution.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(CropboxError::InvalidDimensions {
            width: img.width(),
            height: img.height(),
        });
    }
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded source image"
    );
    Ok(img)
}

/// Whether `path` has one of the extensions offered by the open picker.
pub fn is_supported_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

pub fn image_size(img: &DynamicImage) -> Size {
    Size::new(f64::from(img.width()), f64::from(img.height()))
}
