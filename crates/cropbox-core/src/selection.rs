//! Single rectangular selection with edge-midpoint resize handles.
//!
//! All coordinates are image space (scaled image pixels). Every mutation
//! leaves the rectangle normalized and inside the bounds passed in by the
//! caller, so downstream code never has to repair an inverted rectangle.

use tracing::debug;

use crate::geometry::{Point, Rect, Size};
use crate::settings::SelectionSettings;

/// Resize handle sitting on the midpoint of one rectangle edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    Left,
    Right,
    Top,
    Bottom,
}

impl Handle {
    /// Hit-test order. The first handle whose box contains the pointer wins.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Center of this handle on `rect`.
    pub fn anchor(self, rect: &Rect) -> Point {
        let mid = rect.center();
        match self {
            Self::Left => Point::new(rect.x1, mid.y),
            Self::Right => Point::new(rect.x2, mid.y),
            Self::Top => Point::new(mid.x, rect.y1),
            Self::Bottom => Point::new(mid.x, rect.y2),
        }
    }
}

/// What the current primary-button drag is doing. Lives from press to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragSession {
    /// Drawing a new rectangle; `anchor` is the fixed corner.
    Create { anchor: Point },
    /// Translating the whole rectangle; `last` is the previous pointer position.
    Move { last: Point },
    /// Moving one edge.
    Resize(Handle),
}

#[derive(Clone, Debug)]
pub struct SelectionEditor {
    rect: Option<Rect>,
    drag: Option<DragSession>,
    handle_size: u32,
    min_span: f64,
}

impl SelectionEditor {
    pub fn new(settings: &SelectionSettings) -> Self {
        Self {
            rect: None,
            drag: None,
            handle_size: settings.handle_size,
            min_span: settings.min_span,
        }
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn drag(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn has_selection(&self) -> bool {
        self.rect.is_some()
    }

    pub fn handle_size(&self) -> u32 {
        self.handle_size
    }

    /// Replace the selection with `rect`, normalized and clamped into `bounds`.
    pub fn select(&mut self, rect: Rect, bounds: Size) {
        let a = bounds.clamp(Point::new(rect.x1, rect.y1));
        let b = bounds.clamp(Point::new(rect.x2, rect.y2));
        self.rect = Some(Rect::from_corners(a, b));
        self.drag = None;
    }

    /// Hit box of `handle` in image space, or `None` without a selection.
    pub fn handle_box(&self, handle: Handle) -> Option<Rect> {
        let half = f64::from(self.handle_size / 2);
        self.rect.map(|r| Rect::around(handle.anchor(&r), half))
    }

    pub fn hit_test_handle(&self, p: Point) -> Option<Handle> {
        Handle::ALL
            .into_iter()
            .find(|&h| self.handle_box(h).is_some_and(|b| b.contains(p)))
    }

    pub fn contains(&self, p: Point) -> bool {
        self.rect.is_some_and(|r| r.contains(p))
    }

    /// Start a drag at `p`. Handles take precedence over the interior; a new
    /// rectangle is only started when none exists and `p` is on the image.
    ///
    /// Returns true when the selection geometry changed.
    pub fn press(&mut self, p: Point, bounds: Size) -> bool {
        if self.rect.is_some() {
            if let Some(handle) = self.hit_test_handle(p) {
                debug!(?handle, "Resize started");
                self.drag = Some(DragSession::Resize(handle));
            } else if self.contains(p) {
                debug!("Move started");
                self.drag = Some(DragSession::Move { last: p });
            }
            return false;
        }

        if !bounds.contains(p) {
            return false;
        }

        debug!(x = p.x, y = p.y, "Selection started");
        self.rect = Some(Rect::from_corners(p, p));
        self.drag = Some(DragSession::Create { anchor: p });
        true
    }

    /// Continue the active drag with the pointer at `p`.
    ///
    /// Returns true when the selection geometry changed.
    pub fn drag_to(&mut self, p: Point, bounds: Size) -> bool {
        let (Some(drag), Some(rect)) = (self.drag, self.rect) else {
            return false;
        };
        let p = bounds.clamp(p);

        let updated = match drag {
            DragSession::Create { anchor } => Rect::from_corners(anchor, p),
            DragSession::Move { last } => {
                self.drag = Some(DragSession::Move { last: p });
                translate_within(rect, p.x - last.x, p.y - last.y, bounds)
            }
            DragSession::Resize(handle) => resize_edge(rect, handle, p, bounds, self.min_span),
        }
        .normalized();

        self.rect = Some(updated);
        updated != rect
    }

    /// End the active drag. Returns true if one was active.
    pub fn release(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Cancel the selection when `p` is outside both the rectangle and its
    /// handles. Returns true when the selection was removed.
    pub fn double_click(&mut self, p: Point) -> bool {
        if self.rect.is_none() || self.contains(p) || self.hit_test_handle(p).is_some() {
            return false;
        }
        self.cancel()
    }

    /// Remove the selection. Returns true if one existed.
    pub fn cancel(&mut self) -> bool {
        self.drag = None;
        let removed = self.rect.take().is_some();
        if removed {
            debug!("Selection cancelled");
        }
        removed
    }

    /// Follow a scale change so the selection stays on the same image region.
    ///
    /// `bounds` are the image bounds at the new scale; whole-pixel truncation
    /// of the scaled image can leave a rescaled edge a fraction outside them.
    pub fn rescale(&mut self, ratio: f64, bounds: Size) {
        self.rect = self.rect.map(|r| {
            let scaled = r.scaled(ratio);
            Rect::from_corners(
                bounds.clamp(Point::new(scaled.x1, scaled.y1)),
                bounds.clamp(Point::new(scaled.x2, scaled.y2)),
            )
        });
        self.drag = self.drag.map(|d| match d {
            DragSession::Create { anchor } => DragSession::Create {
                anchor: Point::new(anchor.x * ratio, anchor.y * ratio),
            },
            DragSession::Move { last } => DragSession::Move {
                last: Point::new(last.x * ratio, last.y * ratio),
            },
            resize => resize,
        });
    }
}

/// Translate `rect` by `(dx, dy)`, sliding it back inside `bounds` with both
/// edges moving together so the size is preserved.
fn translate_within(rect: Rect, dx: f64, dy: f64, bounds: Size) -> Rect {
    let mut r = rect.translated(dx, dy);

    if r.x1 < 0.0 {
        r.x2 -= r.x1;
        r.x1 = 0.0;
    }
    if r.y1 < 0.0 {
        r.y2 -= r.y1;
        r.y1 = 0.0;
    }
    if r.x2 > bounds.width {
        r.x1 -= r.x2 - bounds.width;
        r.x2 = bounds.width;
    }
    if r.y2 > bounds.height {
        r.y1 -= r.y2 - bounds.height;
        r.y2 = bounds.height;
    }
    r
}

/// Move the edge owned by `handle` to the pointer, keeping at least
/// `min_span` to the opposite edge and staying inside `bounds`.
fn resize_edge(rect: Rect, handle: Handle, p: Point, bounds: Size, min_span: f64) -> Rect {
    let mut r = rect;
    match handle {
        Handle::Left => r.x1 = p.x.min(r.x2 - min_span).max(0.0),
        Handle::Right => r.x2 = p.x.max(r.x1 + min_span).min(bounds.width),
        Handle::Top => r.y1 = p.y.min(r.y2 - min_span).max(0.0),
        Handle::Bottom => r.y2 = p.y.max(r.y1 + min_span).min(bounds.height),
    }
    r
}
