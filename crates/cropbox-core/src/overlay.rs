//! Display-space view model of the current session.
//!
//! Geometry code never draws; the GUI renders whatever [`Overlay::build`]
//! returns after each mutation.

use crate::geometry::{Point, Rect};
use crate::selection::{Handle, SelectionEditor};
use crate::viewport::ViewportTransform;

#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    /// Where the scaled image is drawn.
    pub image: Rect,
    pub selection: Option<SelectionOverlay>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionOverlay {
    /// Selection outline in display space.
    pub outline: Rect,
    /// Dimmed regions above, below, left and right of the selection.
    /// They tile the display area outside the selection without overlapping.
    pub masks: [Rect; 4],
    pub handles: [(Handle, Rect); 4],
}

impl Overlay {
    pub fn build(transform: &ViewportTransform, editor: &SelectionEditor) -> Self {
        let offset = transform.offset();
        let scaled = transform.scaled_size();
        let image = Rect::new(offset.x, offset.y, offset.x + scaled.width, offset.y + scaled.height);

        let selection = editor.rect().map(|r| {
            let a = transform.image_to_display(Point::new(r.x1, r.y1));
            let b = transform.image_to_display(Point::new(r.x2, r.y2));
            let outline = Rect::new(a.x, a.y, b.x, b.y);
            let display = transform.display_size();

            let half = f64::from(editor.handle_size() / 2);
            let handles = Handle::ALL.map(|h| (h, Rect::around(h.anchor(&outline), half)));

            SelectionOverlay {
                outline,
                masks: mask_regions(outline, display.width, display.height),
                handles,
            }
        });

        Self { image, selection }
    }
}

fn mask_regions(sel: Rect, width: f64, height: f64) -> [Rect; 4] {
    [
        Rect::new(0.0, 0.0, width, sel.y1),
        Rect::new(0.0, sel.y2, width, height),
        Rect::new(0.0, sel.y1, sel.x1, sel.y2),
        Rect::new(sel.x2, sel.y1, width, sel.y2),
    ]
}
