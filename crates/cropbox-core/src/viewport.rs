//! Zoom/pan transform between image space and display space.
//!
//! Image space here is the *scaled* image: a point's display position is
//! `image + offset`, and original pixels are recovered by dividing by `scale`.

use tracing::debug;

use crate::error::{CropboxError, Result};
use crate::geometry::{Point, Size};
use crate::settings::ViewportSettings;

/// Direction of a single zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Positive wheel deltas zoom in, everything else zooms out.
    pub fn from_wheel_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::In
        } else {
            Self::Out
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct PanSession {
    start: Point,
    start_offset: Point,
}

#[derive(Clone, Debug)]
pub struct ViewportTransform {
    source_size: Size,
    display_size: Size,
    scale: f64,
    offset: Point,
    max_scale: f64,
    scale_step: f64,
    pan: Option<PanSession>,
}

impl ViewportTransform {
    /// Create a transform that shrinks `source_size` to fit the display area.
    /// Images that already fit are shown at native resolution.
    pub fn fit(source_size: Size, settings: &ViewportSettings) -> Result<Self> {
        if source_size.width < 1.0 || source_size.height < 1.0 {
            return Err(CropboxError::InvalidDimensions {
                width: source_size.width as u32,
                height: source_size.height as u32,
            });
        }

        let display_size = settings.display_size();
        let scale = fit_scale(source_size, display_size).unwrap_or(1.0);
        debug!(scale, "Initial viewport scale");

        Ok(Self {
            source_size,
            display_size,
            scale,
            offset: Point::default(),
            max_scale: settings.max_scale,
            scale_step: settings.scale_step,
            pan: None,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn source_size(&self) -> Size {
        self.source_size
    }

    pub fn display_size(&self) -> Size {
        self.display_size
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Size of the image at the current scale, truncated to whole pixels.
    /// Every clamp in image space uses these bounds.
    pub fn scaled_size(&self) -> Size {
        Size::new(
            (self.source_size.width * self.scale).trunc(),
            (self.source_size.height * self.scale).trunc(),
        )
    }

    /// Lowest scale a zoom-out may reach: the fit scale for images larger
    /// than the display area, otherwise native resolution.
    pub fn min_allowed_scale(&self) -> f64 {
        fit_scale(self.source_size, self.display_size).unwrap_or(1.0)
    }

    pub fn display_to_image(&self, p: Point) -> Point {
        Point::new(p.x - self.offset.x, p.y - self.offset.y)
    }

    pub fn image_to_display(&self, p: Point) -> Point {
        Point::new(p.x + self.offset.x, p.y + self.offset.y)
    }

    /// Apply one zoom step anchored at `cursor` (display space).
    ///
    /// Returns the applied `new_scale / old_scale` ratio, or `None` when the
    /// step was a no-op.
    pub fn zoom_step(&mut self, direction: ZoomDirection, cursor: Point) -> Option<f64> {
        let target = match direction {
            ZoomDirection::In => self.scale + self.scale_step,
            ZoomDirection::Out => self.scale - self.scale_step,
        };
        self.zoom_to(target, cursor)
    }

    /// Zoom to `target` (clamped), keeping the image point under `cursor` fixed.
    ///
    /// Nothing changes when the clamped scale equals the current one or when
    /// `cursor` is outside the image.
    pub fn zoom_to(&mut self, target: f64, cursor: Point) -> Option<f64> {
        let new_scale = self.max_scale.min(self.min_allowed_scale().max(target));
        if new_scale == self.scale {
            return None;
        }

        let image_point = self.display_to_image(cursor);
        if !self.scaled_size().contains(image_point) {
            return None;
        }

        let ratio = new_scale / self.scale;
        self.scale = new_scale;

        let anchored = Point::new(
            (cursor.x - image_point.x * ratio).trunc(),
            (cursor.y - image_point.y * ratio).trunc(),
        );
        self.offset = self.clamp_offset(anchored);

        debug!(scale = self.scale, ratio, offset_x = self.offset.x, offset_y = self.offset.y, "Zoomed");
        Some(ratio)
    }

    pub fn begin_pan(&mut self, p: Point) {
        self.pan = Some(PanSession {
            start: p,
            start_offset: self.offset,
        });
    }

    /// Move the image by the pointer delta since [`begin_pan`](Self::begin_pan).
    /// Returns true when the offset changed.
    pub fn pan_to(&mut self, p: Point) -> bool {
        let Some(session) = self.pan else {
            return false;
        };

        let moved = Point::new(
            session.start_offset.x + (p.x - session.start.x),
            session.start_offset.y + (p.y - session.start.y),
        );
        let clamped = self.clamp_offset(moved);
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    pub fn end_pan(&mut self) {
        self.pan = None;
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Keep the offset in `[min(0, display - scaled), 0]` per axis.
    ///
    /// An image smaller than the display area is pinned to the top-left corner.
    fn clamp_offset(&self, p: Point) -> Point {
        let scaled = self.scaled_size();
        let min_x = (self.display_size.width - scaled.width).min(0.0);
        let min_y = (self.display_size.height - scaled.height).min(0.0);
        Point::new(p.x.clamp(min_x, 0.0), p.y.clamp(min_y, 0.0))
    }
}

/// Scale that makes `source` fit inside `display`, or `None` if it already fits.
fn fit_scale(source: Size, display: Size) -> Option<f64> {
    if source.width > display.width || source.height > display.height {
        Some((display.width / source.width).min(display.height / source.height))
    } else {
        None
    }
}
