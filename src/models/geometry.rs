//! Geometry primitives for layout
//!
//! All coordinates are in absolute layout units (staff spaces multiplied by
//! the style's spatium). Y grows downward, so "above" means a smaller y.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// A point or displacement vector
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_null(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for PointF {
    type Output = PointF;

    fn add(self, rhs: PointF) -> PointF {
        PointF::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PointF {
    type Output = PointF;

    fn sub(self, rhs: PointF) -> PointF {
        PointF::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for PointF {
    fn add_assign(&mut self, rhs: PointF) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle spanning two opposite corners
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True for the "nothing here" box (no area)
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn translated(&self, by: PointF) -> RectF {
        RectF::new(self.x + by.x, self.y + by.y, self.width, self.height)
    }

    /// Smallest rectangle containing both; empty inputs are ignored
    pub fn united(&self, other: &RectF) -> RectF {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        RectF::from_edges(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = RectF::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.left(), 1.0);
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.top(), 2.0);
        assert_eq!(r.bottom(), 6.0);
        assert!(!r.is_empty());
        assert!(RectF::default().is_empty());
    }

    #[test]
    fn test_translated_moves_origin_only() {
        let r = RectF::new(0.0, 0.0, 2.0, 2.0).translated(PointF::new(5.0, -1.0));
        assert_eq!(r, RectF::new(5.0, -1.0, 2.0, 2.0));
    }

    #[test]
    fn test_united_skips_empty() {
        let a = RectF::new(0.0, 0.0, 1.0, 1.0);
        let b = RectF::new(2.0, -1.0, 1.0, 1.0);
        assert_eq!(a.united(&RectF::default()), a);
        assert_eq!(a.united(&b), RectF::from_edges(0.0, -1.0, 3.0, 1.0));
    }
}
