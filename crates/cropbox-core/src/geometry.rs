//! Plain 2D value types shared by the viewport and the selection editor.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when `p` lies within `[0, width] x [0, height]`.
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Clamp `p` into `[0, width] x [0, height]`.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }
}

/// Axis-aligned rectangle stored as two corners.
///
/// Most constructors normalize so that `x1 <= x2` and `y1 <= y2`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rectangle spanning two arbitrary corners, normalized.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y).normalized()
    }

    /// Square of side `2 * half` centered on `center`.
    pub fn around(center: Point, half: f64) -> Self {
        Self::new(center.x - half, center.y - half, center.x + half, center.y + half)
    }

    pub fn normalized(self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    pub fn is_normalized(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Inclusive on every edge.
    pub fn contains(&self, p: Point) -> bool {
        self.x1 <= p.x && p.x <= self.x2 && self.y1 <= p.y && p.y <= self.y2
    }

    pub fn scaled(&self, ratio: f64) -> Self {
        Self::new(self.x1 * ratio, self.y1 * ratio, self.x2 * ratio, self.y2 * ratio)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }

    /// True when the rectangle lies within `[0, bounds.width] x [0, bounds.height]`.
    pub fn is_within(&self, bounds: Size) -> bool {
        self.x1 >= 0.0 && self.y1 >= 0.0 && self.x2 <= bounds.width && self.y2 <= bounds.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x1, self.y1, self.x2, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes() {
        let r = Rect::from_corners(Point::new(50.0, 40.0), Point::new(10.0, 60.0));
        assert_eq!(r, Rect::new(10.0, 40.0, 50.0, 60.0));
        assert!(r.is_normalized());
    }

    #[test]
    fn contains_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(10.0, 0.0)));
        assert!(!r.contains(Point::new(10.5, 0.0)));
    }

    #[test]
    fn size_clamp() {
        let s = Size::new(100.0, 50.0);
        assert_eq!(s.clamp(Point::new(-3.0, 80.0)), Point::new(0.0, 50.0));
    }
}
