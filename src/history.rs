//! History log: bounded, linear undo/redo over persistence collaborators.
//!
//! DESIGN
//! ======
//! The log records three kinds of action (create, delete, update) and replays
//! them through an [`ObjectPersistence`] implementation supplied per call.
//! Both stacks keep the most recent action at the back; the undo stack evicts
//! from the front once it exceeds `max_size`. Pushing clears the redo stack,
//! so history never branches.
//!
//! REPLAY
//! ======
//! The log is either `Idle` or `Replaying`. `undo`/`redo` enter `Replaying`
//! synchronously before the first await and a [`ReplayGuard`] returns to
//! `Idle` on every exit, including errors and a dropped future. While
//! replaying, `push` is a silent no-op so the replay's own effects are not
//! recorded, and a second `undo`/`redo` is refused.
//!
//! ERROR HANDLING
//! ==============
//! An action moves between stacks only after its effect succeeds. On failure
//! it stays where it was and the collaborator's error reaches the caller,
//! who can retry by calling `undo`/`redo` again.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::consts::DEFAULT_HISTORY_MAX_SIZE;
use crate::doc::{BoardObject, ObjectId, PartialBoardObject};
use crate::error::{HistoryError, PersistenceError};
use crate::gesture::GestureOutcome;

// =============================================================================
// ACTIONS
// =============================================================================

/// One undoable user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HistoryAction {
    /// An object was created; `object` is its full snapshot.
    Create { object: BoardObject },
    /// An object was deleted; `object` is its last full snapshot.
    Delete { object: BoardObject },
    /// An object's fields changed from `before` to `after`.
    Update {
        object_id: ObjectId,
        before: PartialBoardObject,
        after: PartialBoardObject,
    },
}

impl HistoryAction {
    /// The object this action applies to.
    #[must_use]
    pub fn object_id(&self) -> ObjectId {
        match self {
            Self::Create { object } | Self::Delete { object } => object.id,
            Self::Update { object_id, .. } => *object_id,
        }
    }

    /// Short verb for UI affordances ("Undo create").
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Delete { .. } => "delete",
            Self::Update { .. } => "update",
        }
    }

    /// Effect that reverses this action.
    #[must_use]
    pub fn inverse(&self) -> Effect<'_> {
        match self {
            Self::Create { object } => Effect::Delete(object.id),
            Self::Delete { object } => Effect::Restore(object.id, object),
            Self::Update { object_id, before, .. } => Effect::Update(*object_id, before),
        }
    }

    /// Effect that re-applies this action.
    #[must_use]
    pub fn forward(&self) -> Effect<'_> {
        match self {
            Self::Create { object } => Effect::Restore(object.id, object),
            Self::Delete { object } => Effect::Delete(object.id),
            Self::Update { object_id, after, .. } => Effect::Update(*object_id, after),
        }
    }
}

impl From<GestureOutcome> for HistoryAction {
    fn from(outcome: GestureOutcome) -> Self {
        Self::Update { object_id: outcome.object_id, before: outcome.before, after: outcome.after }
    }
}

/// A single persistence call derived from an action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect<'a> {
    Delete(ObjectId),
    Restore(ObjectId, &'a BoardObject),
    Update(ObjectId, &'a PartialBoardObject),
}

impl Effect<'_> {
    /// Invoke the matching collaborator.
    ///
    /// # Errors
    ///
    /// Returns whatever the collaborator returns.
    pub async fn apply(self, store: &dyn ObjectPersistence) -> Result<(), PersistenceError> {
        match self {
            Effect::Delete(id) => store.delete(id).await,
            Effect::Restore(id, snapshot) => store.restore(id, snapshot).await,
            Effect::Update(id, patch) => store.update(id, patch).await,
        }
    }
}

// =============================================================================
// PERSISTENCE COLLABORATOR
// =============================================================================

/// Writes replayed effects to the shared store. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ObjectPersistence: Send + Sync {
    /// Remove the object.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the store refuses or cannot be reached.
    async fn delete(&self, id: ObjectId) -> Result<(), PersistenceError>;

    /// Recreate the object from a full snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the store refuses or cannot be reached.
    async fn restore(&self, id: ObjectId, snapshot: &BoardObject) -> Result<(), PersistenceError>;

    /// Apply a sparse patch to the object.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the store refuses or cannot be reached.
    async fn update(&self, id: ObjectId, patch: &PartialBoardObject) -> Result<(), PersistenceError>;
}

// =============================================================================
// LOG
// =============================================================================

/// Whether a replay is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Replaying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Undo,
    Redo,
}

struct Stacks {
    undo: VecDeque<HistoryAction>,
    redo: VecDeque<HistoryAction>,
    phase: Phase,
}

impl Stacks {
    fn source(&mut self, direction: Direction) -> &mut VecDeque<HistoryAction> {
        match direction {
            Direction::Undo => &mut self.undo,
            Direction::Redo => &mut self.redo,
        }
    }

    fn target(&mut self, direction: Direction) -> &mut VecDeque<HistoryAction> {
        match direction {
            Direction::Undo => &mut self.redo,
            Direction::Redo => &mut self.undo,
        }
    }
}

/// Append and evict from the front until `stack.len() <= max_size`.
fn push_bounded(stack: &mut VecDeque<HistoryAction>, action: HistoryAction, max_size: usize) {
    stack.push_back(action);
    while stack.len() > max_size {
        stack.pop_front();
    }
}

/// Bounded linear undo/redo log.
///
/// Shared by reference between the editing layer (which pushes) and the undo
/// UI (which replays); all methods take `&self`.
pub struct HistoryLog {
    max_size: usize,
    stacks: Mutex<Stacks>,
}

/// Returns the log to `Idle` when dropped.
struct ReplayGuard<'a> {
    log: &'a HistoryLog,
}

impl Drop for ReplayGuard<'_> {
    fn drop(&mut self) {
        self.log.lock().phase = Phase::Idle;
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_MAX_SIZE)
    }
}

impl From<&EngineConfig> for HistoryLog {
    fn from(config: &EngineConfig) -> Self {
        Self::new(config.history_max_size)
    }
}

impl HistoryLog {
    /// Create an empty log. A `max_size` of zero is raised to one.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size: max_size.max(1),
            stacks: Mutex::new(Stacks { undo: VecDeque::new(), redo: VecDeque::new(), phase: Phase::Idle }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Stacks> {
        self.stacks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a completed user action. Dropped while a replay is in flight.
    pub fn push(&self, action: HistoryAction) {
        let mut stacks = self.lock();
        if stacks.phase == Phase::Replaying {
            tracing::debug!(kind = action.label(), id = %action.object_id(), "push ignored during replay");
            return;
        }
        push_bounded(&mut stacks.undo, action, self.max_size);
        stacks.redo.clear();
    }

    /// Reverse the most recent action.
    ///
    /// Returns `Ok(false)` without touching any collaborator when there is
    /// nothing to undo or a replay is already in flight.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Replay`] if the collaborator fails; the action
    /// stays on the undo stack.
    pub async fn undo(&self, store: &dyn ObjectPersistence) -> Result<bool, HistoryError> {
        self.replay(Direction::Undo, store).await
    }

    /// Re-apply the most recently undone action.
    ///
    /// Returns `Ok(false)` without touching any collaborator when there is
    /// nothing to redo or a replay is already in flight.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Replay`] if the collaborator fails; the action
    /// stays on the redo stack.
    pub async fn redo(&self, store: &dyn ObjectPersistence) -> Result<bool, HistoryError> {
        self.replay(Direction::Redo, store).await
    }

    async fn replay(&self, direction: Direction, store: &dyn ObjectPersistence) -> Result<bool, HistoryError> {
        let (action, _guard) = {
            let mut stacks = self.lock();
            if stacks.phase == Phase::Replaying {
                tracing::debug!(?direction, "replay already in flight");
                return Ok(false);
            }
            let Some(action) = stacks.source(direction).back().cloned() else {
                return Ok(false);
            };
            stacks.phase = Phase::Replaying;
            (action, ReplayGuard { log: self })
        };

        let effect = match direction {
            Direction::Undo => action.inverse(),
            Direction::Redo => action.forward(),
        };
        if let Err(e) = effect.apply(store).await {
            tracing::warn!(error = %e, ?direction, kind = action.label(), id = %action.object_id(), "history replay failed");
            return Err(e.into());
        }

        let mut stacks = self.lock();
        let done = stacks.source(direction).pop_back();
        if let Some(done) = done {
            push_bounded(stacks.target(direction), done, self.max_size);
        }
        tracing::debug!(?direction, kind = action.label(), id = %action.object_id(), "history replayed");
        Ok(true)
    }

    /// Drop both stacks. Ignored while a replay is in flight.
    pub fn clear(&self) {
        let mut stacks = self.lock();
        if stacks.phase == Phase::Replaying {
            return;
        }
        stacks.undo.clear();
        stacks.redo.clear();
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    #[must_use]
    pub fn is_replaying(&self) -> bool {
        self.lock().phase == Phase::Replaying
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.lock().undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.lock().redo.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.lock().undo.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.lock().redo.len()
    }

    /// The action `undo` would reverse next.
    #[must_use]
    pub fn peek_undo(&self) -> Option<HistoryAction> {
        self.lock().undo.back().cloned()
    }

    /// The action `redo` would re-apply next.
    #[must_use]
    pub fn peek_redo(&self) -> Option<HistoryAction> {
        self.lock().redo.back().cloned()
    }

    /// Undo stack, oldest first.
    #[must_use]
    pub fn undo_actions(&self) -> Vec<HistoryAction> {
        self.lock().undo.iter().cloned().collect()
    }

    /// Redo stack, oldest first.
    #[must_use]
    pub fn redo_actions(&self) -> Vec<HistoryAction> {
        self.lock().redo.iter().cloned().collect()
    }
}
