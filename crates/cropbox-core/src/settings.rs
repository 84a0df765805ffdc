use serde::{Deserialize, Serialize};

use crate::consts::{HANDLE_SIZE, MAX_SCALE, MIN_SPAN, SCALE_STEP, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::geometry::Size;

/// Tunable parameters of a cropping session.
///
/// Nothing is read from or written to disk by the dialog itself; binaries
/// build this from command-line flags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub viewport: ViewportSettings,
    #[serde(default)]
    pub selection: SelectionSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Display area width in pixels.
    pub width: f64,
    /// Display area height in pixels.
    pub height: f64,
    pub max_scale: f64,
    /// Scale change per wheel notch.
    pub scale_step: f64,
}

impl ViewportSettings {
    pub fn display_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            max_scale: MAX_SCALE,
            scale_step: SCALE_STEP,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionSettings {
    /// Handle side length in display pixels.
    pub handle_size: u32,
    /// Minimum width/height kept by a handle resize.
    pub min_span: f64,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            handle_size: HANDLE_SIZE,
            min_span: MIN_SPAN,
        }
    }
}
