//! Pixel-space geometry shared by the wrapper, the shell and the widgets.
//!
//! All coordinates are `f32` pixels with the origin at the top-left corner of
//! the window and `y` growing downwards.

use std::ops::{Add, AddAssign, Sub};

/// A 2D point or size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vector2 {
    /// The origin / zero-length vector.
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    /// Create a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width (never negative for rectangles produced by this crate).
    pub width: f32,
    /// Height (never negative for rectangles produced by this crate).
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from position and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether `point` lies inside the rectangle (right/bottom edges exclusive).
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Overlapping region of two rectangles.
    ///
    /// Disjoint rectangles yield a zero-sized rectangle anchored at the
    /// clamped corner.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right()).max(left);
        let bottom = self.bottom().min(other.bottom()).max(top);
        Rect::new(left, top, right - left, bottom - top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_excludes_far_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Vector2::new(10.0, 10.0)));
        assert!(rect.contains(Vector2::new(29.9, 29.9)));
        assert!(!rect.contains(Vector2::new(30.0, 15.0)));
        assert!(!rect.contains(Vector2::new(15.0, 30.0)));
    }

    #[test]
    fn intersect_of_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 100.0, 50.0);
        let b = Rect::new(50.0, 25.0, 100.0, 100.0);
        assert_eq!(a.intersect(&b), Rect::new(50.0, 25.0, 50.0, 25.0));
    }

    #[test]
    fn intersect_of_disjoint_rects_is_empty() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        let overlap = a.intersect(&b);
        assert_eq!(overlap.width, 0.0);
        assert_eq!(overlap.height, 0.0);
    }

    #[test]
    fn vector_arithmetic() {
        let mut v = Vector2::new(1.0, 2.0) + Vector2::new(3.0, 4.0);
        assert_eq!(v, Vector2::new(4.0, 6.0));
        v += Vector2::new(-4.0, -6.0);
        assert_eq!(v, Vector2::ZERO);
        assert_eq!(Vector2::new(5.0, 5.0) - Vector2::new(2.0, 1.0), Vector2::new(3.0, 4.0));
    }
}
