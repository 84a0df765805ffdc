use image::imageops::FilterType;
use image::DynamicImage;
use tracing::debug;

/// Convert the source image to an egui ColorImage for upload as a texture.
///
/// Sources larger than `max_side` on either axis are shrunk to fit, keeping
/// the aspect ratio. The texture is always drawn into the scaled image rect,
/// so only sharpness changes; crops are still cut from the full source.
pub fn image_to_color_image(img: &DynamicImage, max_side: usize) -> egui::ColorImage {
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX);
    let rgba = if img.width() > max_side || img.height() > max_side {
        debug!(
            width = img.width(),
            height = img.height(),
            max_side,
            "Downscaling source for texture upload"
        );
        img.resize(max_side, max_side, FilterType::Triangle).to_rgba8()
    } else {
        img.to_rgba8()
    };
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn small_source_keeps_its_size() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(120, 80));
        assert_eq!(image_to_color_image(&img, 2048).size, [120, 80]);
    }

    #[test]
    fn wide_source_is_shrunk_to_max_side() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(400, 40));
        let [w, h] = image_to_color_image(&img, 100).size;
        assert_eq!(w, 100);
        assert!((9..=11).contains(&h), "height {h}");
    }

    #[test]
    fn tall_source_is_shrunk_to_max_side() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(30, 300));
        let [w, h] = image_to_color_image(&img, 150).size;
        assert_eq!(h, 150);
        assert!(w <= 150);
    }
}
