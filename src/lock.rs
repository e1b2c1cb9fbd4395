//! Lock gate: objects claimed by another collaborator are inert locally.
//!
//! Lock ownership lives in the shared store. The caller reduces it to one
//! boolean per object (`locked_by_other`) and every interaction entry point
//! runs it through [`LockGate::admits`] before doing anything else. A closed
//! gate is not an error: the entry point simply does nothing.

#[cfg(test)]
#[path = "lock_test.rs"]
mod lock_test;

use serde::{Deserialize, Serialize};

use crate::doc::ObjectId;

/// Per-object lock as held by the shared store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockState {
    pub owner_id: Option<ObjectId>,
}

impl LockState {
    #[must_use]
    pub fn owned_by(owner_id: ObjectId) -> Self {
        Self { owner_id: Some(owner_id) }
    }

    /// Has an owner, and the owner is not `local_user`.
    #[must_use]
    pub fn locked_by_other(&self, local_user: ObjectId) -> bool {
        self.owner_id.is_some_and(|owner| owner != local_user)
    }
}

/// Interaction entry points guarded by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// Pointer-down on the object body.
    Body,
    /// Pointer-down on a resize, rotate, or endpoint handle.
    Handle,
    /// Double-click to edit text.
    DoubleClick,
}

/// The gating rule shared by every shape kind.
pub struct LockGate;

impl LockGate {
    /// Whether `entry` may proceed on an object with the given lock status.
    #[must_use]
    pub fn admits(entry: EntryPoint, object_id: ObjectId, locked_by_other: bool) -> bool {
        if locked_by_other {
            tracing::debug!(?entry, %object_id, "interaction rejected: locked by another user");
            return false;
        }
        true
    }
}
