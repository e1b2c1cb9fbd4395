//! Input model: pointer events, modifier keys, and the interaction state machine.
//!
//! `InteractionState` is the single answer to "what is the user doing right
//! now". It is owned by the engine and changed only through
//! [`InteractionState::set_mode`], which keeps `mode == Idle` and
//! "no active object" equivalent.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::ObjectId;

/// What the local user is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Nothing in progress.
    #[default]
    Idle,
    /// Translating an object or dragging one edge endpoint.
    Dragging,
    /// Resizing an object by one of its handles.
    Resizing,
    /// Rotating an object around its center.
    Rotating,
    /// Picking an anchor object for a new connector.
    Connecting,
    /// Editing an object's text in place.
    Editing,
}

impl InteractionMode {
    /// Whether this mode is driven by an active pointer session.
    #[must_use]
    pub fn is_gesture(self) -> bool {
        matches!(self, Self::Dragging | Self::Resizing | Self::Rotating)
    }
}

/// The current interaction mode plus the object it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    active_object_id: Option<ObjectId>,
}

impl InteractionState {
    /// Fresh session state: `Idle`, no active object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to `mode`.
    ///
    /// `Idle` always clears the active object, whatever `object_id` says. Any
    /// other mode replaces the previous state verbatim; the previous mode is
    /// not consulted. A non-idle mode without an object is refused and leaves
    /// the state unchanged (returns `false`).
    pub fn set_mode(&mut self, mode: InteractionMode, object_id: Option<ObjectId>) -> bool {
        if mode == InteractionMode::Idle {
            self.mode = InteractionMode::Idle;
            self.active_object_id = None;
            tracing::debug!("interaction mode -> idle");
            return true;
        }
        let Some(id) = object_id else {
            tracing::debug!(?mode, "refusing non-idle mode without an object");
            return false;
        };
        self.mode = mode;
        self.active_object_id = Some(id);
        tracing::debug!(?mode, %id, "interaction mode changed");
        true
    }

    /// Shorthand for `set_mode(Idle, None)`.
    pub fn reset(&mut self) {
        self.set_mode(InteractionMode::Idle, None);
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn active_object_id(&self) -> Option<ObjectId> {
        self.active_object_id
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.mode == InteractionMode::Idle
    }

    /// `Editing` swallows delete/backspace shortcuts.
    #[must_use]
    pub fn suppresses_delete_shortcut(&self) -> bool {
        self.mode == InteractionMode::Editing
    }

    /// Gestures may only start from `Idle`.
    #[must_use]
    pub fn suppresses_gestures(&self) -> bool {
        !self.is_idle()
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// `Delete` or `Backspace`.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// A pointer event as delivered by the UI, in screen space.
///
/// Forwarded verbatim to the selection layer as the originating event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub screen: Point,
    pub button: Button,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Primary-button event with no modifiers.
    #[must_use]
    pub fn primary(screen: Point) -> Self {
        Self { screen, button: Button::Primary, modifiers: Modifiers::default() }
    }
}
