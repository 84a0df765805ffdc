//! Toolkit-independent input events fed to [`CropSession::handle_input`].
//!
//! [`CropSession::handle_input`]: crate::session::CropSession::handle_input

use crate::geometry::Point;
use crate::io::crop::OriginalCoords;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Draws, moves and resizes the selection.
    Primary,
    /// Pans the image.
    Secondary,
}

/// Commands issued from the dialog's buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SaveSelection,
    CopyCoordinates,
    CancelSelection,
}

/// Pointer positions are in display space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Press { button: PointerButton, pos: Point },
    Move { pos: Point },
    Release { button: PointerButton, pos: Point },
    DoubleClick { button: PointerButton, pos: Point },
    /// Positive `delta` zooms in.
    Wheel { delta: f64, pos: Point },
    Button(Action),
}

/// What the shell has to do after an event.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Unchanged,
    /// Geometry changed; the view must be re-rendered.
    Redraw,
    /// Ask for a destination and export this region of the original image.
    Save(OriginalCoords),
    /// Put this text on the clipboard.
    Copy(String),
    /// This save or copy was requested without a selection.
    EmptySelection(Action),
}

impl From<bool> for Outcome {
    /// `true` (geometry changed) maps to [`Outcome::Redraw`].
    fn from(changed: bool) -> Self {
        if changed {
            Self::Redraw
        } else {
            Self::Unchanged
        }
    }
}
