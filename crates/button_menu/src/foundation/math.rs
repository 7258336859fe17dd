//! Math utilities and types
//!
//! Provides the fundamental geometry types for screen-space widgets.
//! Pointer coordinates and hit rectangles are integer pixels; colors are
//! normalized RGBA.

pub use nalgebra::{Vector2, Vector4};

/// 2D integer vector type (pixel offsets)
pub type Vec2i = Vector2<i32>;

/// 2D integer point type (pixel positions)
pub type Point2i = nalgebra::Point2<i32>;

/// RGBA color with normalized components
pub type Color = Vector4<f32>;

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// X coordinate of the top-left corner
    pub x: i32,

    /// Y coordinate of the top-left corner
    pub y: i32,

    /// Width in pixels
    pub width: i32,

    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this rectangle
    ///
    /// Containment is left/top-inclusive and right/bottom-exclusive, so
    /// adjacent rectangles never both claim a shared edge pixel.
    pub fn contains(&self, point: Point2i) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// This rectangle shifted by the given offset
    pub fn translated(&self, offset: Vec2i) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            width: self.width,
            height: self.height,
        }
    }
}
