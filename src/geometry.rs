//! Screen-space geometry shared by the evasion logic and the presenter.
//!
//! Everything here is pure math over `f64` client coordinates; no DOM types
//! leak in, so the evasion controller can run against a fake provider in tests.

use glam::DVec2;

/// Axis-aligned rectangle in client coordinates (top-left origin, y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Standard strict overlap test; rectangles that merely share an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

/// Source of live bounding rectangles for the three elements the evasion
/// controller cares about. Any read may come back `None` (element not mounted
/// yet); callers treat that as "skip this interaction".
pub trait GeometryProvider {
    fn container_rect(&self) -> Option<Rect>;
    fn avoider_rect(&self) -> Option<Rect>;
    fn affirmative_rect(&self) -> Option<Rect>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_midpoint() {
        let r = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(r.center(), DVec2::new(60.0, 40.0));
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(25.0, 25.0, 50.0, 50.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(100.0, 0.0, 50.0, 50.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn edge_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(50.0, 0.0, 50.0, 50.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }
}
