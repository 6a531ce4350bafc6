//! Math utilities and types
//!
//! The canvas is a flat 2D surface, so only the 2D subset of nalgebra is used.

pub use nalgebra::Vector2;

/// 2D vector type (velocities, offsets)
pub type Vec2 = Vector2<f32>;

/// 2D point type in surface coordinates
pub type Point2 = nalgebra::Point2<f32>;

/// Axis-aligned rectangle in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Point2,
    /// Bottom-right corner
    pub max: Point2,
}

impl Rect {
    /// Create a rectangle covering `(0, 0)` to `(width, height)`
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Point2::new(0.0, 0.0),
            max: Point2::new(width, height),
        }
    }

    /// Width of the rectangle
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Whether the point lies inside the rectangle (edges included)
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x
            && point.y >= self.min.y && point.y <= self.max.y
    }
}
