//! Pan/zoom camera and the screen↔board coordinate conversions.
//!
//! Every gesture resolver works in board space. The only place screen pixels
//! are turned into board units is here, so the `board = screen / zoom` rule is
//! applied in exactly one spot.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::DEFAULT_ZOOM;

/// A point in either screen or board space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }

    /// Component-wise `self + delta`.
    #[must_use]
    pub fn offset(self, delta: Point) -> Point {
        Point { x: self.x + delta.x, y: self.y + delta.y }
    }
}

/// Camera state for pan/zoom on the infinite canvas.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom) and is always `> 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: DEFAULT_ZOOM }
    }
}

impl Camera {
    /// Whether `zoom` is usable as a divisor for screen deltas.
    #[must_use]
    pub fn is_valid_zoom(zoom: f64) -> bool {
        zoom.is_finite() && zoom > 0.0
    }

    /// Convert a screen-space point (CSS pixels) to board coordinates.
    #[must_use]
    pub fn screen_to_board(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a screen-space pointer delta to a board-space delta.
    ///
    /// Pan does not participate: a delta is a difference of two points that
    /// share the same pan offset.
    #[must_use]
    pub fn screen_delta_to_board(&self, screen_delta: Point) -> Point {
        Point {
            x: screen_delta.x / self.zoom,
            y: screen_delta.y / self.zoom,
        }
    }
}
