//! Axis-aligned rectangle geometry for entity bounds
//!
//! Screen coordinates: origin at the top-left corner, y grows downward.
//! Rectangles are stored as center + size, matching how entities track
//! their positions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// An axis-aligned bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Strict overlap test: rectangles that merely share an edge do not
    /// count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether this rectangle lies entirely inside `outer` (edges may touch)
    pub fn within(&self, outer: &Rect) -> bool {
        self.left() >= outer.left()
            && self.right() <= outer.right()
            && self.top() >= outer.top()
            && self.bottom() <= outer.bottom()
    }

    /// Midpoint of the top edge
    pub fn midtop(&self) -> Vec2 {
        Vec2::new(self.center.x, self.top())
    }

    /// Midpoint of the bottom edge
    pub fn midbottom(&self) -> Vec2 {
        Vec2::new(self.center.x, self.bottom())
    }

    /// Midpoint of the left edge
    pub fn midleft(&self) -> Vec2 {
        Vec2::new(self.left(), self.center.y)
    }

    /// Midpoint of the right edge
    pub fn midright(&self) -> Vec2 {
        Vec2::new(self.right(), self.center.y)
    }
}

/// The visible screen rectangle, used for movement clamping and bullet
/// bounds removal
pub fn screen_bounds() -> Rect {
    Rect::new(
        Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(Vec2::new(100.0, 50.0), Vec2::new(40.0, 20.0));
        assert_eq!(r.left(), 80.0);
        assert_eq!(r.right(), 120.0);
        assert_eq!(r.top(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.midtop(), Vec2::new(100.0, 40.0));
        assert_eq!(r.midleft(), Vec2::new(80.0, 50.0));
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_edge_touch_is_miss() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_within_screen() {
        let screen = screen_bounds();
        let inside = Rect::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0));
        let straddling = Rect::new(Vec2::new(0.0, 100.0), Vec2::new(10.0, 10.0));
        assert!(inside.within(&screen));
        assert!(!straddling.within(&screen));
    }
}
