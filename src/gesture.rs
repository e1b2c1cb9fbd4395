//! Gesture resolvers: one pointer session mapped to candidate geometry patches.
//!
//! A [`GestureSession`] exists only between pointer-down and pointer-up. It
//! snapshots whatever geometry the gesture needs at start, then turns each
//! pointer position into a [`PartialBoardObject`]. Shapes differ only in
//! which [`GestureKind`] they start; gating and mode handling live in the
//! engine and are shared by all of them.
//!
//! Screen deltas are always measured from the gesture-start pointer, not the
//! previous event, and divided by zoom once via
//! [`Camera::screen_delta_to_board`].

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::camera::{Camera, Point};
use crate::doc::{BoardObject, ObjectId, PartialBoardObject};
use crate::hit::{EdgeEnd, HitPart, ResizeAnchor};
use crate::input::InteractionMode;
use crate::rotation::RotationResolver;

/// Gesture-specific snapshot taken at pointer-down.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureKind {
    /// Move the bounding box.
    Translate {
        /// Object position at gesture start.
        origin: Point,
    },
    /// Drag one resize handle.
    Resize {
        anchor: ResizeAnchor,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        /// Width/height floor in board units.
        min_size: f64,
    },
    /// Rotate around the object center.
    Rotate(RotationResolver),
    /// Drag one endpoint of a line or connector.
    Endpoint {
        end: EdgeEnd,
        /// Endpoint position at gesture start.
        origin: Point,
    },
}

/// A committed gesture: what the object looked like before and after.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureOutcome {
    pub object_id: ObjectId,
    pub before: PartialBoardObject,
    pub after: PartialBoardObject,
}

/// The active pointer session.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    object_id: ObjectId,
    kind: GestureKind,
    start_screen: Point,
    last: Option<PartialBoardObject>,
}

impl GestureSession {
    /// Start the gesture matching `part` on `object`, if that object kind supports it.
    ///
    /// Returns `None` for combinations with no gesture (e.g. a line body, or a
    /// resize handle on an edge) and for edges missing endpoint coordinates.
    #[must_use]
    pub fn begin(object: &BoardObject, part: HitPart, start_screen: Point, camera: &Camera, min_size: f64) -> Option<Self> {
        let kind = match part {
            HitPart::Body if object.kind.is_box() => GestureKind::Translate { origin: object.position() },
            HitPart::ResizeHandle(anchor) if object.kind.is_box() => GestureKind::Resize {
                anchor,
                x: object.x,
                y: object.y,
                width: object.width,
                height: object.height,
                min_size,
            },
            HitPart::RotateHandle if object.kind.is_box() => {
                let pointer = camera.screen_to_board(start_screen);
                GestureKind::Rotate(RotationResolver::new(object.center(), pointer, object.rotation))
            }
            HitPart::EdgeEndpoint(end) if object.kind.is_edge() => {
                GestureKind::Endpoint { end, origin: object.props().endpoint(end)? }
            }
            _ => return None,
        };
        Some(Self { object_id: object.id, kind, start_screen, last: None })
    }

    #[must_use]
    pub fn object_id(&self) -> ObjectId {
        self.object_id
    }

    #[must_use]
    pub fn kind(&self) -> &GestureKind {
        &self.kind
    }

    /// Interaction mode this gesture runs under.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        match self.kind {
            GestureKind::Translate { .. } | GestureKind::Endpoint { .. } => InteractionMode::Dragging,
            GestureKind::Resize { .. } => InteractionMode::Resizing,
            GestureKind::Rotate(_) => InteractionMode::Rotating,
        }
    }

    /// Geometry at gesture start, shaped like the patches this gesture emits.
    #[must_use]
    pub fn before(&self) -> PartialBoardObject {
        match self.kind {
            GestureKind::Translate { origin } => PartialBoardObject::position(origin),
            GestureKind::Resize { x, y, width, height, .. } => PartialBoardObject::bounds(x, y, width, height),
            GestureKind::Rotate(resolver) => PartialBoardObject::rotation(resolver.start_rotation()),
            GestureKind::Endpoint { end, origin } => PartialBoardObject::endpoint(end, origin),
        }
    }

    /// Candidate patch for the pointer at `screen`. Pure; see [`Self::update`].
    #[must_use]
    pub fn resolve(&self, screen: Point, camera: &Camera) -> PartialBoardObject {
        let delta = camera.screen_delta_to_board(screen.delta_from(self.start_screen));
        match self.kind {
            GestureKind::Translate { origin } => PartialBoardObject::position(origin.offset(delta)),
            GestureKind::Resize { anchor, x, y, width, height, min_size } => {
                resize_bounds(anchor, (x, y, width, height), delta, min_size)
            }
            GestureKind::Rotate(resolver) => {
                PartialBoardObject::rotation(resolver.resolve(camera.screen_to_board(screen)))
            }
            GestureKind::Endpoint { end, origin } => PartialBoardObject::endpoint(end, origin.offset(delta)),
        }
    }

    /// Resolve and remember the patch as the latest candidate.
    pub fn update(&mut self, screen: Point, camera: &Camera) -> PartialBoardObject {
        let patch = self.resolve(screen, camera);
        self.last = Some(patch.clone());
        patch
    }

    /// End the session. `None` when the pointer never moved the object.
    #[must_use]
    pub fn finish(self) -> Option<GestureOutcome> {
        let before = self.before();
        let after = self.last?;
        if after == before {
            return None;
        }
        Some(GestureOutcome { object_id: self.object_id, before, after })
    }
}

/// Move the edges `anchor` controls by `delta`, holding the opposite edges
/// fixed, and clamp each dimension to `min_size`.
fn resize_bounds(anchor: ResizeAnchor, (x, y, width, height): (f64, f64, f64, f64), delta: Point, min_size: f64) -> PartialBoardObject {
    let (mut left, mut right) = (x, x + width);
    let (mut top, mut bottom) = (y, y + height);

    if anchor.moves_left() {
        left += delta.x;
    }
    if anchor.moves_right() {
        right += delta.x;
    }
    if anchor.moves_top() {
        top += delta.y;
    }
    if anchor.moves_bottom() {
        bottom += delta.y;
    }

    if right - left < min_size {
        if anchor.moves_left() {
            left = right - min_size;
        } else {
            right = left + min_size;
        }
    }
    if bottom - top < min_size {
        if anchor.moves_top() {
            top = bottom - min_size;
        } else {
            bottom = top + min_size;
        }
    }

    PartialBoardObject::bounds(left, top, right - left, bottom - top)
}
