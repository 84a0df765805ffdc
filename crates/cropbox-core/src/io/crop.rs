use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::{DynamicImage, ImageFormat};
use tracing::info;

use crate::consts::DEFAULT_EXPORT_EXTENSION;
use crate::error::{CropboxError, Result};
use crate::geometry::Rect;

/// Selection corners in original-image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OriginalCoords {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl OriginalCoords {
    /// Map a normalized image-space selection back to the source image.
    ///
    /// Each coordinate is truncated to a whole image-space pixel first, then
    /// divided by `scale` and truncated again.
    pub fn from_selection(rect: &Rect, scale: f64) -> Self {
        let factor = 1.0 / scale;
        let to_original = |v: f64| (v.trunc() * factor).trunc().max(0.0) as u32;
        Self {
            x1: to_original(rect.x1),
            y1: to_original(rect.y1),
            x2: to_original(rect.x2),
            y2: to_original(rect.y2),
        }
    }

    pub fn width(&self) -> u32 {
        self.x1.abs_diff(self.x2)
    }

    pub fn height(&self) -> u32 {
        self.y1.abs_diff(self.y2)
    }

    pub fn to_crop_rect(&self) -> CropRect {
        CropRect {
            x: self.x1.min(self.x2),
            y: self.y1.min(self.y2),
            width: self.width(),
            height: self.height(),
        }
    }
}

impl fmt::Display for OriginalCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

impl FromStr for OriginalCoords {
    type Err = CropboxError;

    /// Accepts `x1,y1,x2,y2` with optional spaces and surrounding parentheses,
    /// so the clipboard text can be pasted back verbatim.
    fn from_str(s: &str) -> Result<Self> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let values = inner
            .split(',')
            .map(|v| v.trim().parse::<u32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CropboxError::InvalidCrop(format!("cannot parse '{s}': {e}")))?;

        match values[..] {
            [x1, y1, x2, y2] => Ok(Self { x1, y1, x2, y2 }),
            _ => Err(CropboxError::InvalidCrop(format!(
                "expected four values x1,y1,x2,y2, got {}",
                values.len()
            ))),
        }
    }
}

/// A rectangle in source-image coordinates for cropping.
#[derive(Clone, Debug, PartialEq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Check the crop is non-empty and fits within the source dimensions.
    pub fn validated(&self, src_w: u32, src_h: u32) -> Result<CropRect> {
        if self.width == 0 || self.height == 0 {
            return Err(CropboxError::InvalidCrop(
                "Crop width and height must be > 0".into(),
            ));
        }

        if self.x + self.width > src_w || self.y + self.height > src_h {
            return Err(CropboxError::InvalidCrop(format!(
                "Crop region ({},{} {}x{}) exceeds source dimensions ({src_w}x{src_h})",
                self.x, self.y, self.width, self.height
            )));
        }

        Ok(self.clone())
    }
}

/// Cut `coords` out of the unmodified source image.
pub fn crop_image(image: &DynamicImage, coords: &OriginalCoords) -> Result<DynamicImage> {
    let rect = coords
        .to_crop_rect()
        .validated(image.width(), image.height())?;
    Ok(image.crop_imm(rect.x, rect.y, rect.width, rect.height))
}

/// Crop and encode to `path`, picking the format from its extension.
///
/// A path without an extension gets `.png`. Returns the path actually written.
pub fn save_crop(image: &DynamicImage, coords: &OriginalCoords, path: &Path) -> Result<PathBuf> {
    let path = with_default_extension(path);
    let format = ImageFormat::from_path(&path).map_err(|_| {
        CropboxError::UnsupportedFormat(
            path.extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
        )
    })?;

    let cropped = crop_image(image, coords)?;
    // JPEG has no alpha channel.
    let cropped = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(cropped.to_rgb8()),
        _ => cropped,
    };

    cropped.save_with_format(&path, format)?;
    info!(
        path = %path.display(),
        width = cropped.width(),
        height = cropped.height(),
        "Saved crop"
    );
    Ok(path)
}

fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXPORT_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extension_is_png() {
        assert_eq!(with_default_extension(Path::new("out")), PathBuf::from("out.png"));
        assert_eq!(with_default_extension(Path::new("out.jpg")), PathBuf::from("out.jpg"));
    }
}
