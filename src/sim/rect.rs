//! Axis-aligned rectangle geometry for the world and its occupants
//!
//! Everything in this world is an axis-aligned rect in pixel coordinates:
//! - x, y: top-left corner (y grows downward, as on screen)
//! - w, h: extent (must be positive)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w > 0.0 && h > 0.0, "degenerate rect {w}x{h}");
        Self { x, y, w, h }
    }

    /// Left edge
    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge (largest y; the world is y-down)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point of the rect
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Check if two rects overlap (strict; touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Check if a point is inside the rect
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Horizontal extents overlap (ignores y)
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x
    }

    /// Vertical extents overlap (ignores x)
    #[inline]
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.y < other.bottom() && self.bottom() > other.y
    }

    /// The rect grown by `margin` on every side
    pub fn inflated(&self, margin: f32) -> Rect {
        Rect {
            x: self.x - margin,
            y: self.y - margin,
            w: self.w + margin * 2.0,
            h: self.h + margin * 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 0.0, 10.0, 10.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlaps_touching_edges() {
        // Edge-to-edge contact is not an overlap
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains_point(Vec2::new(25.0, 40.0)));
        assert!(r.contains_point(Vec2::new(10.0, 20.0))); // corner counts
        assert!(!r.contains_point(Vec2::new(9.0, 40.0)));
        assert!(!r.contains_point(Vec2::new(25.0, 61.0)));
    }

    #[test]
    fn test_inflated_creates_margin_overlap() {
        // 12 px apart; a 12 px inflation makes them touch but not overlap,
        // anything larger overlaps
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(22.0, 0.0, 10.0, 10.0);

        assert!(!a.inflated(5.0).overlaps(&b));
        assert!(!a.inflated(12.0).overlaps(&b));
        assert!(a.inflated(12.5).overlaps(&b));
    }

    #[test]
    fn test_axis_extent_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 100.0, 10.0, 10.0);
        assert!(a.overlaps_x(&b));
        assert!(!a.overlaps_y(&b));
        assert!(!a.overlaps(&b));
    }
}
