/// Width of the fixed display area (and of the dialog window), in display pixels.
pub const VIEWPORT_WIDTH: f64 = 1344.0;

/// Total height of the dialog window, in display pixels.
pub const WINDOW_HEIGHT: f64 = 756.0;

/// Height reserved below the display area for the coordinate field and buttons.
pub const PANEL_HEIGHT: f64 = 52.0;

/// Height of the fixed display area.
pub const VIEWPORT_HEIGHT: f64 = WINDOW_HEIGHT - PANEL_HEIGHT;

/// Upper bound for the zoom scale.
pub const MAX_SCALE: f64 = 10.0;

/// Scale increment applied per wheel notch.
pub const SCALE_STEP: f64 = 0.2;

/// Side length of a resize handle, in display pixels.
pub const HANDLE_SIZE: u32 = 8;

/// Smallest width/height a handle resize may leave, in image-space units.
pub const MIN_SPAN: f64 = 5.0;

/// Extensions offered by the open picker.
pub const SOURCE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Extension appended when the save target has none.
pub const DEFAULT_EXPORT_EXTENSION: &str = "png";
