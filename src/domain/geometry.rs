//! Core geometric primitives
//!
//! This module defines pure geometry types shared by the picker state and the
//! rendering layer. Widget-local coordinates are `f32` (matching the raster
//! backend); glyph bounding boxes are `f64` font units with y pointing up.

/// A point in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Rectangle in widget-local coordinates
///
/// Used for the available drawing area handed to the layout pass. Degenerate
/// rectangles (zero width or height) are legal inputs everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Creates a new rectangle
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// A circle used both as a drawn radio dot and as a hit region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle from its center and radius
    pub fn new(cx: f32, cy: f32, radius: f32) -> Self {
        Self { cx, cy, radius }
    }

    /// Returns true if the point lies on or inside the circle
    pub fn contains(&self, point: Point) -> bool {
        let dx = point.x - self.cx;
        let dy = point.y - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Returns a copy translated by the given offsets
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            radius: self.radius,
        }
    }
}

/// Glyph bounding box in font units
///
/// Edges follow font conventions: y grows upward, so `top > bottom` for any
/// glyph with visible marks above the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Bounds {
    /// Creates a new bounding box from its four edges
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_contains_point() {
        let circle = Circle::new(10.0, 10.0, 2.5);
        assert!(circle.contains(Point::new(10.0, 10.0))); // Center
        assert!(circle.contains(Point::new(12.5, 10.0))); // On the rim
        assert!(circle.contains(Point::new(11.0, 11.0))); // Inside
        assert!(!circle.contains(Point::new(12.6, 10.0))); // Just outside
        assert!(!circle.contains(Point::new(13.0, 13.0))); // Outside diagonal
    }

    #[test]
    fn circle_translated_keeps_radius() {
        let circle = Circle::new(1.0, 2.0, 2.5).translated(3.0, 0.0);
        assert_eq!(circle, Circle::new(4.0, 2.0, 2.5));
    }

    #[test]
    fn bounds_edges() {
        let bounds = Bounds::new(30.0, -10.0, 400.0, 700.0);
        assert_eq!(bounds.left, 30.0);
        assert_eq!(bounds.bottom, -10.0);
        assert_eq!(bounds.right, 400.0);
        assert_eq!(bounds.top, 700.0);
    }
}
