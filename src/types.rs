//! Strongly-typed coordinate primitives for symsvg.
//!
//! Symbol data arrives in library space, where Y grows upward. SVG wants
//! Y growing downward. Keeping the two spaces as distinct types means the
//! flip happens exactly once per raw coordinate: `LibPoint::to_display()`
//! is the only crossing point, and everything downstream (bounding box,
//! shape descriptors) only accepts [`DisplayPoint`].

use std::fmt;

/// A point in library space (Y-up), as read from a symbol record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LibPoint {
    pub x: i32,
    pub y: i32,
}

impl LibPoint {
    pub fn new(x: i32, y: i32) -> Self {
        LibPoint { x, y }
    }

    /// Convert to display space by negating Y. Radii are signed magnitudes
    /// and never pass through this.
    pub fn to_display(self) -> DisplayPoint {
        DisplayPoint {
            x: self.x,
            y: -self.y,
        }
    }
}

/// A point in display space (Y-down), ready for SVG emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DisplayPoint {
    pub x: i32,
    pub y: i32,
}

impl DisplayPoint {
    pub fn new(x: i32, y: i32) -> Self {
        DisplayPoint { x, y }
    }
}

impl fmt::Display for DisplayPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Running min/max extents of everything rendered for one component.
///
/// Starts empty and grows monotonically; there is no removal. One instance
/// is constructed per component and handed to the renderer by value, so
/// extents can never leak between components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// Create an empty bounding box (will snap to the first included point).
    pub fn new() -> Self {
        BoundingBox {
            min_x: i32::MAX,
            min_y: i32::MAX,
            max_x: i32::MIN,
            max_y: i32::MIN,
        }
    }

    /// True if nothing has been included yet.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Grow to include a point.
    pub fn include(&mut self, p: DisplayPoint) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Grow to include a point expanded by a radius in all four directions.
    /// Used for circles and arcs, whose extents reach past their center.
    pub fn include_with_radius(&mut self, p: DisplayPoint, radius: i32) {
        let r = radius.abs();
        self.include(DisplayPoint::new(p.x - r, p.y - r));
        self.include(DisplayPoint::new(p.x + r, p.y + r));
    }

    /// Expand symmetrically on all four sides. Callers must not pad an
    /// empty box (the sentinel extents would wrap).
    pub fn pad(&mut self, padding: i32) {
        self.min_x -= padding;
        self.min_y -= padding;
        self.max_x += padding;
        self.max_y += padding;
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}
