//! Document model: board objects, sparse patches, and the local object store.
//!
//! `BoardObject` is the full snapshot of one canvas object; it is what the
//! history log keeps for create/delete so the object can be recreated
//! verbatim. `PartialBoardObject` is the sparse patch used both for gesture
//! transforms and for the before/after halves of an update.
//!
//! Line and connector endpoints live in `props` under `x1`/`y1`/`x2`/`y2` so a
//! patch touching one endpoint leaves the other's keys alone.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::hit::EdgeEnd;

/// Unique identifier for a board object or a user.
pub type ObjectId = Uuid;

/// The kind of a board object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Circle / ellipse inscribed within the bounding box.
    Circle,
    /// Free-standing text block.
    Text,
    /// Sticky note.
    Sticky,
    /// Straight line between two independent endpoints.
    Line,
    /// Connector between two endpoints, usually anchored to other objects.
    Connector,
}

impl ObjectKind {
    /// Whether this kind is positioned by two endpoints rather than a box.
    #[must_use]
    pub fn is_edge(self) -> bool {
        matches!(self, Self::Line | Self::Connector)
    }

    /// Whether the body of this kind can be translated by dragging.
    #[must_use]
    pub fn is_box(self) -> bool {
        !self.is_edge()
    }
}

/// A board object as stored in the document and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardObject {
    /// Unique identifier for this object.
    pub id: ObjectId,
    /// The board this object belongs to.
    pub board_id: ObjectId,
    /// Shape or edge type.
    pub kind: ObjectKind,
    /// Left edge of the bounding box in board coordinates.
    pub x: f64,
    /// Top edge of the bounding box in board coordinates.
    pub y: f64,
    /// Width of the bounding box in board coordinates.
    pub width: f64,
    /// Height of the bounding box in board coordinates.
    pub height: f64,
    /// Clockwise rotation in degrees around the bounding-box center. Unbounded.
    pub rotation: f64,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i64,
    /// Open-ended per-kind properties (fill, text, endpoints, etc.).
    pub props: serde_json::Value,
    /// User who created the object, if known.
    pub created_by: Option<ObjectId>,
    /// Edit counter maintained by the shared store.
    pub version: i64,
}

impl BoardObject {
    /// Center of the bounding box; the rotation pivot.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Top-left corner of the bounding box.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Typed view over `props`.
    #[must_use]
    pub fn props(&self) -> Props<'_> {
        Props::new(&self.props)
    }
}

/// Sparse update for a board object. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialBoardObject {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New rotation in degrees, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// New z-index, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    /// Props keys to merge or remove (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

impl PartialBoardObject {
    /// Patch that moves the bounding box to `pos`.
    #[must_use]
    pub fn position(pos: Point) -> Self {
        Self { x: Some(pos.x), y: Some(pos.y), ..Default::default() }
    }

    /// Patch that sets only the rotation.
    #[must_use]
    pub fn rotation(degrees: f64) -> Self {
        Self { rotation: Some(degrees), ..Default::default() }
    }

    /// Patch that replaces the whole bounding box.
    #[must_use]
    pub fn bounds(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Patch that moves one endpoint of an edge, leaving the other untouched.
    #[must_use]
    pub fn endpoint(end: EdgeEnd, pos: Point) -> Self {
        let (kx, ky) = end.prop_keys();
        let mut props = serde_json::Map::new();
        props.insert(kx.into(), serde_json::json!(pos.x));
        props.insert(ky.into(), serde_json::json!(pos.y));
        Self { props: Some(serde_json::Value::Object(props)), ..Default::default() }
    }

    /// Returns `true` when no field would be applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.rotation.is_none()
            && self.z_index.is_none()
            && self.props.is_none()
    }
}

/// Typed access to common props fields from a `BoardObject.props` JSON value.
pub struct Props<'a> {
    value: &'a serde_json::Value,
}

impl<'a> Props<'a> {
    /// Wrap a reference to a `props` JSON value for typed access.
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    /// Label text displayed on the object. Empty string when absent.
    #[must_use]
    pub fn text(&self) -> &str {
        self.value
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Position of one endpoint of an edge, if both coordinates are present.
    #[must_use]
    pub fn endpoint(&self, end: EdgeEnd) -> Option<Point> {
        let (kx, ky) = end.prop_keys();
        let x = self.value.get(kx).and_then(serde_json::Value::as_f64)?;
        let y = self.value.get(ky).and_then(serde_json::Value::as_f64)?;
        Some(Point::new(x, y))
    }
}

/// In-memory mirror of the shared object store.
pub struct DocStore {
    objects: HashMap<ObjectId, BoardObject>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: HashMap::new() }
    }

    /// Insert or replace an object.
    pub fn insert(&mut self, obj: BoardObject) {
        self.objects.insert(obj.id, obj);
    }

    /// Remove an object by id, returning it if it was present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<BoardObject> {
        self.objects.remove(id)
    }

    /// Return a reference to an object by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&BoardObject> {
        self.objects.get(id)
    }

    /// Apply a partial update to an existing object. Returns false, leaving the object
    /// untouched, if it doesn't exist or the props patch is not a JSON object.
    pub fn apply_partial(&mut self, id: &ObjectId, partial: &PartialBoardObject) -> bool {
        let incoming = match partial.props.as_ref().map(serde_json::Value::as_object) {
            Some(None) => return false,
            Some(Some(map)) => Some(map),
            None => None,
        };
        let Some(obj) = self.objects.get_mut(id) else {
            return false;
        };
        if let Some(x) = partial.x {
            obj.x = x;
        }
        if let Some(y) = partial.y {
            obj.y = y;
        }
        if let Some(w) = partial.width {
            obj.width = w;
        }
        if let Some(h) = partial.height {
            obj.height = h;
        }
        if let Some(r) = partial.rotation {
            obj.rotation = r;
        }
        if let Some(z) = partial.z_index {
            obj.z_index = z;
        }
        if let Some(incoming) = incoming {
            if !obj.props.is_object() {
                obj.props = serde_json::json!({});
            }

            if let Some(existing) = obj.props.as_object_mut() {
                for (k, v) in incoming {
                    if v.is_null() {
                        existing.remove(k);
                    } else {
                        existing.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        true
    }

    /// Replace all objects with a full snapshot.
    pub fn load_snapshot(&mut self, objects: Vec<BoardObject>) {
        self.objects.clear();
        for obj in objects {
            self.objects.insert(obj.id, obj);
        }
    }

    /// Number of objects currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}
