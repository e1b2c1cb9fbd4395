//! Interaction engine: pointer, keyboard and edit entry points.
//!
//! `EngineCore` owns the interaction state, the active gesture session, the
//! camera and a local mirror of board objects. Entry points never call out
//! directly; they return [`Action`]s for the host to route to the selection
//! layer, the transform/persistence layer and the text editor.
//!
//! Every object entry point runs the [`LockGate`] first. A closed gate
//! returns no actions and changes nothing.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::camera::{Camera, Point};
use crate::config::EngineConfig;
use crate::doc::{BoardObject, DocStore, ObjectId, PartialBoardObject};
use crate::gesture::{GestureOutcome, GestureSession};
use crate::hit::Hit;
use crate::input::{Button, InteractionMode, InteractionState, Key, PointerEvent};
use crate::lock::{EntryPoint, LockGate};

/// Actions returned from entry points for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Tell the selection layer `id` was picked by `event`.
    SelectObject { id: ObjectId, event: PointerEvent },
    /// Candidate geometry from the active gesture; already applied locally.
    ReportTransform { id: ObjectId, fields: PartialBoardObject },
    /// A gesture ended having moved its object. Suitable for the history log.
    GestureCommitted(GestureOutcome),
    /// Rising (`true`) or falling (`false`) edge of text editing on `id`.
    EditStateChanged { id: ObjectId, editing: bool },
    /// The delete shortcut was pressed with `id` selected.
    DeleteRequested { id: ObjectId },
}

/// Core engine state.
pub struct EngineCore {
    pub doc: DocStore,
    pub camera: Camera,
    config: EngineConfig,
    interaction: InteractionState,
    gesture: Option<GestureSession>,
    selected_id: Option<ObjectId>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            doc: DocStore::new(),
            camera: Camera::default(),
            config,
            interaction: InteractionState::new(),
            gesture: None,
            selected_id: None,
        }
    }

    // --- Data inputs ---

    /// Hydrate the document from a server snapshot.
    pub fn load_snapshot(&mut self, objects: Vec<BoardObject>) {
        self.doc.load_snapshot(objects);
    }

    /// Apply a server broadcast: object created.
    pub fn apply_create(&mut self, object: BoardObject) {
        self.doc.insert(object);
    }

    /// Apply a server broadcast: object updated.
    pub fn apply_update(&mut self, id: &ObjectId, fields: &PartialBoardObject) {
        self.doc.apply_partial(id, fields);
    }

    /// Apply a server broadcast: object deleted.
    ///
    /// Anything targeting the object ends: its gesture is discarded, edit
    /// mode is left (with a falling edge), a connect flow anchored on it is
    /// cancelled, and it is deselected.
    pub fn apply_delete(&mut self, id: &ObjectId) -> Vec<Action> {
        self.doc.remove(id);
        if self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        if self.gesture.as_ref().is_some_and(|g| g.object_id() == *id) {
            tracing::debug!(%id, "gesture target deleted remotely");
            self.gesture = None;
        }
        if self.interaction.active_object_id().as_ref() != Some(id) {
            return Vec::new();
        }
        let was_editing = self.interaction.mode() == InteractionMode::Editing;
        self.interaction.reset();
        if was_editing {
            vec![Action::EditStateChanged { id: *id, editing: false }]
        } else {
            Vec::new()
        }
    }

    // --- Camera ---

    /// Set the zoom factor. Non-finite or non-positive values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !Camera::is_valid_zoom(zoom) {
            tracing::warn!(zoom, "ignoring invalid zoom");
            return;
        }
        self.camera.zoom = zoom;
    }

    /// Set the pan offset in CSS pixels.
    pub fn set_pan(&mut self, pan_x: f64, pan_y: f64) {
        self.camera.pan_x = pan_x;
        self.camera.pan_y = pan_y;
    }

    // --- Pointer ---

    /// Pointer-down on an object body or handle.
    ///
    /// Lock gate first. Then selection is reported, even while connecting.
    /// A gesture starts only from `Idle` and only when the object kind
    /// supports a gesture for the hit part.
    pub fn on_pointer_down(&mut self, hit: Hit, event: PointerEvent, locked_by_other: bool) -> Vec<Action> {
        if event.button != Button::Primary {
            return Vec::new();
        }
        let id = hit.object_id;
        let entry = if hit.part.is_handle() { EntryPoint::Handle } else { EntryPoint::Body };
        if !LockGate::admits(entry, id, locked_by_other) {
            return Vec::new();
        }

        self.selected_id = Some(id);
        let actions = vec![Action::SelectObject { id, event }];

        if self.interaction.suppresses_gestures() || self.gesture.is_some() {
            tracing::debug!(mode = ?self.interaction.mode(), %id, "gesture suppressed");
            return actions;
        }
        let Some(object) = self.doc.get(&id) else {
            return actions;
        };
        let Some(session) =
            GestureSession::begin(object, hit.part, event.screen, &self.camera, self.config.min_object_size)
        else {
            return actions;
        };

        self.interaction.set_mode(session.mode(), Some(id));
        tracing::debug!(mode = ?session.mode(), %id, "gesture started");
        self.gesture = Some(session);
        actions
    }

    /// Pointer-move. Without an active gesture this is a no-op.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let Some(session) = self.gesture.as_mut() else {
            return Vec::new();
        };
        let id = session.object_id();
        let fields = session.update(screen, &self.camera);
        self.doc.apply_partial(&id, &fields);
        vec![Action::ReportTransform { id, fields }]
    }

    /// Pointer-up. Ends the active gesture wherever the pointer is.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let Some(session) = self.gesture.take() else {
            return Vec::new();
        };
        if self.interaction.mode().is_gesture() {
            self.interaction.reset();
        }
        tracing::debug!(id = %session.object_id(), "gesture ended");
        session.finish().map(Action::GestureCommitted).into_iter().collect()
    }

    // --- Editing ---

    /// Double-click to edit. Lock-gated; the current mode is not consulted.
    /// A running gesture is ended first and its commit precedes the edit edges.
    pub fn on_double_click(&mut self, id: ObjectId, locked_by_other: bool) -> Vec<Action> {
        if !LockGate::admits(EntryPoint::DoubleClick, id, locked_by_other) {
            return Vec::new();
        }
        if !self.doc.get(&id).is_some_and(|o| o.kind.is_box()) {
            return Vec::new();
        }
        let mut actions = self.on_pointer_up();

        let previous = self.editing_id();
        if previous == Some(id) {
            return actions;
        }
        if let Some(prev) = previous {
            actions.push(Action::EditStateChanged { id: prev, editing: false });
        }
        self.interaction.set_mode(InteractionMode::Editing, Some(id));
        actions.push(Action::EditStateChanged { id, editing: true });
        actions
    }

    /// Leave edit mode. No-op when not editing.
    pub fn end_edit(&mut self) -> Vec<Action> {
        let Some(id) = self.editing_id() else {
            return Vec::new();
        };
        self.interaction.reset();
        vec![Action::EditStateChanged { id, editing: false }]
    }

    // --- Connecting ---

    /// Start a connector from `anchor_id`. Only from `Idle`.
    pub fn begin_connect(&mut self, anchor_id: ObjectId) -> bool {
        if !self.interaction.is_idle() {
            return false;
        }
        self.interaction.set_mode(InteractionMode::Connecting, Some(anchor_id))
    }

    /// Finish or cancel the connect flow.
    pub fn end_connect(&mut self) {
        if self.interaction.mode() == InteractionMode::Connecting {
            self.interaction.reset();
        }
    }

    // --- Keyboard ---

    /// Key-down. Escape leaves editing or connecting; Delete/Backspace
    /// request deletion of the selection unless editing.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_escape() {
            match self.interaction.mode() {
                InteractionMode::Editing => return self.end_edit(),
                InteractionMode::Connecting => self.end_connect(),
                _ => {}
            }
            return Vec::new();
        }
        if key.is_delete() {
            if self.interaction.suppresses_delete_shortcut() {
                return Vec::new();
            }
            if let Some(id) = self.selected_id {
                return vec![Action::DeleteRequested { id }];
            }
        }
        Vec::new()
    }

    // --- Queries ---

    /// The currently selected object, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.selected_id
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Settings the engine was built with; the host sizes its `HistoryLog` from these.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn gesture(&self) -> Option<&GestureSession> {
        self.gesture.as_ref()
    }

    /// The object being text-edited, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<ObjectId> {
        if self.interaction.mode() == InteractionMode::Editing {
            self.interaction.active_object_id()
        } else {
            None
        }
    }

    /// Look up an object by ID.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&BoardObject> {
        self.doc.get(id)
    }
}
