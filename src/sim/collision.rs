//! Axis-aligned bounding box collision
//!
//! Every hit test in the game (bullet vs alien, player vs alien) goes through
//! `Rect::overlaps`. Edges that merely touch do not count as overlap.

use glam::Vec2;

/// An axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test: each near edge must be less than the other's far edge
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_basic() {
        let a = rect(0.0, 0.0, 20.0, 20.0);
        let b = rect(10.0, 10.0, 20.0, 20.0);
        assert!(a.overlaps(&b));

        // Bullet fully inside an alien
        let bullet = rect(5.0, 5.0, 3.0, 10.0);
        assert!(a.overlaps(&bullet));
        assert!(bullet.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 20.0, 20.0);
        assert!(!a.overlaps(&rect(20.0, 0.0, 20.0, 20.0)));
        assert!(!a.overlaps(&rect(0.0, 20.0, 20.0, 20.0)));
        assert!(!a.overlaps(&rect(-20.0, 0.0, 20.0, 20.0)));
        assert!(!a.overlaps(&rect(20.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_disjoint() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(50.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(0.0, -30.0, 10.0, 10.0)));
    }

    #[test]
    fn test_center() {
        let r = rect(10.0, 20.0, 20.0, 10.0);
        assert_eq!(r.center(), Vec2::new(20.0, 25.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.5f32..100.0, ah in 0.5f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.5f32..100.0, bh in 0.5f32..100.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_adjacent_rects_never_overlap(
            x in -200.0f32..200.0, y in -200.0f32..200.0,
            w in 1.0f32..50.0, h in 1.0f32..50.0,
            other_h in 1.0f32..50.0, shift in -40.0f32..40.0,
        ) {
            let a = rect(x, y, w, h);
            // Placed exactly on a's right edge, vertically anywhere
            let right = rect(a.right(), y + shift, w, other_h);
            // Placed exactly on a's bottom edge
            let below = rect(x + shift, a.bottom(), w, other_h);
            prop_assert!(!a.overlaps(&right));
            prop_assert!(!a.overlaps(&below));
        }

        #[test]
        fn prop_rect_overlaps_itself(
            x in -200.0f32..200.0, y in -200.0f32..200.0,
            w in 0.5f32..50.0, h in 0.5f32..50.0,
        ) {
            let a = rect(x, y, w, h);
            prop_assert!(a.overlaps(&a));
        }
    }
}
