//! Pointer targets: which object, and which part of it, a pointer-down landed on.
//!
//! Hit-testing geometry belongs to the UI layer; this module only names the
//! sub-targets so entry points can pick the matching gesture.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::ObjectId;

/// Which part of an object was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
    RotateHandle,
    EdgeEndpoint(EdgeEnd),
    EdgeBody,
}

impl HitPart {
    /// Whether this is a manipulation handle rather than the object body.
    #[must_use]
    pub fn is_handle(self) -> bool {
        matches!(self, Self::ResizeHandle(_) | Self::RotateHandle | Self::EdgeEndpoint(_))
    }
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// The handle drags the left edge.
    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// The handle drags the right edge.
    #[must_use]
    pub fn moves_right(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    /// The handle drags the top edge.
    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// The handle drags the bottom edge.
    #[must_use]
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }
}

/// Which end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// The start endpoint, `(x1, y1)`.
    A,
    /// The end endpoint, `(x2, y2)`.
    B,
}

impl EdgeEnd {
    /// Props keys holding this endpoint's coordinates.
    #[must_use]
    pub fn prop_keys(self) -> (&'static str, &'static str) {
        match self {
            Self::A => ("x1", "y1"),
            Self::B => ("x2", "y2"),
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub object_id: ObjectId,
    pub part: HitPart,
}

impl Hit {
    #[must_use]
    pub fn new(object_id: ObjectId, part: HitPart) -> Self {
        Self { object_id, part }
    }
}
