use cropbox_core::settings::{Settings, ViewportSettings};
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

/// RGB image whose red channel encodes x and green channel encodes y (mod 256).
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 0])
    }))
}

/// Half-transparent RGBA image, for formats without alpha.
pub fn rgba_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 128])))
}

/// Default settings with a custom display area.
pub fn settings_with_viewport(width: f64, height: f64) -> Settings {
    Settings {
        viewport: ViewportSettings {
            width,
            height,
            ..ViewportSettings::default()
        },
        ..Settings::default()
    }
}
