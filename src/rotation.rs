//! Rotation resolver: pointer positions around a pivot to rotation angles.
//!
//! Angles are measured with `atan2` in board space (y grows downward, so a
//! positive delta is clockwise on screen) and reported in degrees.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

use crate::camera::Point;
use crate::consts::{FULL_TURN_DEG, HALF_TURN_DEG};

/// Angle in degrees of `pointer` as seen from `center`.
#[must_use]
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}

/// Fold a difference of two `atan2` angles onto the shortest path.
///
/// The result lies in `(-180, 180]`; an exact half turn is reported as `+180`.
/// One correction is enough because both inputs lie in `(-180, 180]`.
#[must_use]
pub fn normalize_delta(delta: f64) -> f64 {
    if delta > HALF_TURN_DEG {
        delta - FULL_TURN_DEG
    } else if delta <= -HALF_TURN_DEG {
        delta + FULL_TURN_DEG
    } else {
        delta
    }
}

/// Map any angle into `[0, 360)` for display.
///
/// Never used for gesture deltas; reported rotations stay unbounded.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle % FULL_TURN_DEG;
    let wrapped = if wrapped < 0.0 { wrapped + FULL_TURN_DEG } else { wrapped };
    // -1e-14 % 360 + 360 rounds to exactly 360.
    if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
}

/// Per-gesture rotation state captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationResolver {
    center: Point,
    start_angle: f64,
    start_rotation: f64,
}

impl RotationResolver {
    /// Snapshot the pivot, the pointer angle at gesture start, and the object's rotation.
    #[must_use]
    pub fn new(center: Point, start_pointer: Point, start_rotation: f64) -> Self {
        Self {
            center,
            start_angle: pointer_angle(center, start_pointer),
            start_rotation,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn start_rotation(&self) -> f64 {
        self.start_rotation
    }

    /// Shortest-path angular change since gesture start.
    #[must_use]
    pub fn delta(&self, pointer: Point) -> f64 {
        normalize_delta(pointer_angle(self.center, pointer) - self.start_angle)
    }

    /// Rotation to report for the current pointer position.
    #[must_use]
    pub fn resolve(&self, pointer: Point) -> f64 {
        self.start_rotation + self.delta(pointer)
    }
}
