//! Playfield bounds and axis-aligned boxes
//!
//! Screen coordinates: origin top-left, x to the right, y downward.
//! The playfield spans [0, width] x [0, height].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The rectangular playfield all bodies live in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width and height as a vector (indexable per axis)
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Slope of the top-left to bottom-right diagonal
    #[inline]
    pub fn diagonal_slope(&self) -> f32 {
        self.height / self.width
    }

    /// Corner by index: 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right
    pub fn corner(&self, index: usize) -> Vec2 {
        match index % 4 {
            0 => Vec2::ZERO,
            1 => Vec2::new(self.width, 0.0),
            2 => Vec2::new(0.0, self.height),
            _ => Vec2::new(self.width, self.height),
        }
    }

    /// Check if a circle has left the playfield entirely
    pub fn is_clear_of(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius < 0.0
            || center.x - radius > self.width
            || center.y + radius < 0.0
            || center.y - radius > self.height
    }
}

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bounding square of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            size: Vec2::splat(2.0 * radius),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let field = Playfield::new(800.0, 600.0);
        assert_eq!(field.corner(0), Vec2::new(0.0, 0.0));
        assert_eq!(field.corner(1), Vec2::new(800.0, 0.0));
        assert_eq!(field.corner(2), Vec2::new(0.0, 600.0));
        assert_eq!(field.corner(3), Vec2::new(800.0, 600.0));
        assert!((field.diagonal_slope() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_is_clear_of() {
        let field = Playfield::new(800.0, 600.0);
        assert!(!field.is_clear_of(Vec2::new(-10.0, 300.0), 15.0));
        assert!(field.is_clear_of(Vec2::new(-16.0, 300.0), 15.0));
        assert!(field.is_clear_of(Vec2::new(400.0, 700.0), 15.0));
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(50.0, 25.0));
        let b = Aabb::around_circle(Vec2::new(60.0, 10.0), 20.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        // Touching edges only
        let c = Aabb::new(Vec2::new(50.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&c));

        let far = Aabb::around_circle(Vec2::new(200.0, 200.0), 20.0);
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_around_circle() {
        let b = Aabb::around_circle(Vec2::new(100.0, 50.0), 20.0);
        assert_eq!(b.min, Vec2::new(80.0, 30.0));
        assert_eq!(b.max(), Vec2::new(120.0, 70.0));
    }
}
