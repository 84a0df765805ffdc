pub mod button_bar;
pub mod canvas;

use cropbox_core::geometry::{Point, Rect};

/// Map a display-space rectangle onto the canvas whose top-left is `origin`.
pub(crate) fn to_screen(r: Rect, origin: egui::Pos2) -> egui::Rect {
    egui::Rect::from_min_max(
        origin + egui::vec2(r.x1 as f32, r.y1 as f32),
        origin + egui::vec2(r.x2 as f32, r.y2 as f32),
    )
}

/// Map a screen position to display space relative to `origin`.
pub(crate) fn to_display(p: egui::Pos2, origin: egui::Pos2) -> Point {
    Point::new(f64::from(p.x - origin.x), f64::from(p.y - origin.y))
}
