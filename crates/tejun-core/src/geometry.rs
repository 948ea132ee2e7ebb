//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the fundamental geometric types used to place
//! process-model elements on the diagram plane.
//!
//! # Coordinate System
//!
//! Tejun uses a coordinate system consistent with SVG and BPMN DI:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

use serde::Serialize;

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use tejun_core::geometry::Point;
/// let a = Point::new(10.0, 20.0);
/// let b = Point::new(20.0, 40.0);
///
/// let mid = a.midpoint(b);
/// assert_eq!(mid.x(), 15.0);
/// assert_eq!(mid.y(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Calculates the midpoint between this point and another point.
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Width and height dimensions of a diagram element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size with the specified dimensions.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height.
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned bounding box defined by its top-left corner and size.
///
/// This matches the `dc:Bounds` record of BPMN DI: `x`/`y` name the top-left
/// corner, not the center.
///
/// # Examples
///
/// ```
/// # use tejun_core::geometry::{Bounds, Point, Size};
/// let bounds = Bounds::new(Point::new(100.0, 122.0), Size::new(36.0, 36.0));
/// assert_eq!(bounds.center().x(), 118.0);
/// assert_eq!(bounds.center().y(), 140.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Bounds {
    /// Creates a bounding box from a top-left corner and a size.
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x(),
            y: origin.y(),
            width: size.width(),
            height: size.height(),
        }
    }

    /// Returns the x-coordinate of the top-left corner.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the top-left corner.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the width of the box.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height of the box.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the size of the box.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the center point of the box.
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
