//! Geometry utilities for collision detection

/// Axis-aligned rectangle, top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Snap to the pixel grid for drawing: (x, y, w, h)
    pub fn to_pixels(&self) -> (i32, i32, u32, u32) {
        (
            self.x as i32,
            self.y as i32,
            self.w.max(0.0) as u32,
            self.h.max(0.0) as u32,
        )
    }
}

/// Open-interval AABB overlap test.
///
/// Rectangles that only share an edge do not overlap.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x + a.w > b.x && a.x < b.x + b.w && a.y + a.h > b.y && a.y < b.y + b.h
}
