//! Axis-aligned rectangle geometry
//!
//! Screen space: origin top-left, x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of `half_extent` on every side of `center`
    pub fn centered(center: Vec2, half_extent: f32) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            2.0 * half_extent,
            2.0 * half_extent,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Overlap with another rectangle, see [`intersects`]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        intersects(*self, *other)
    }
}

/// Overlap rectangle of `a` and `b`, or `None` if they are apart.
///
/// Edges that exactly touch count as overlapping and yield a zero-width or
/// zero-height result.
pub fn intersects(a: Rect, b: Rect) -> Option<Rect> {
    if a.x > b.right() || b.x > a.right() || a.y > b.bottom() || b.y > a.bottom() {
        return None;
    }

    let x = a.x.max(b.x);
    let y = a.y.max(b.y);
    Some(Rect {
        x,
        y,
        w: a.right().min(b.right()) - x,
        h: a.bottom().min(b.bottom()) - y,
    })
}

/// Sign of `x` as -1, 0 or 1 (zero maps to 0, unlike `f32::signum`)
#[inline]
pub fn signum(x: f32) -> i32 {
    (x > 0.0) as i32 - (x < 0.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_rectangle() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(6.0, 8.0, 10.0, 10.0);

        let overlap = intersects(a, b).unwrap();
        assert_eq!(overlap, Rect::new(6.0, 8.0, 4.0, 2.0));
        // Symmetric
        assert_eq!(intersects(b, a), Some(overlap));
    }

    #[test]
    fn test_contained_rectangle() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(20.0, 30.0, 5.0, 6.0);
        assert_eq!(outer.intersection(&inner), Some(inner));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);

        let overlap = intersects(a, right).unwrap();
        assert_eq!(overlap.w, 0.0);
        assert_eq!(overlap.h, 10.0);

        let overlap = intersects(a, below).unwrap();
        assert_eq!(overlap.w, 10.0);
        assert_eq!(overlap.h, 0.0);
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(intersects(a, Rect::new(10.5, 0.0, 5.0, 5.0)).is_none());
        assert!(intersects(a, Rect::new(0.0, -6.0, 5.0, 5.0)).is_none());
    }

    #[test]
    fn test_centered() {
        let r = Rect::centered(Vec2::new(50.0, 40.0), 8.0);
        assert_eq!(r, Rect::new(42.0, 32.0, 16.0, 16.0));
        assert_eq!(r.center(), Vec2::new(50.0, 40.0));
        assert_eq!(r.right(), 58.0);
        assert_eq!(r.bottom(), 48.0);
    }

    #[test]
    fn test_signum() {
        assert_eq!(signum(3.5), 1);
        assert_eq!(signum(-0.1), -1);
        assert_eq!(signum(0.0), 0);
        assert_eq!(signum(-0.0), 0);
    }
}
