//! Error types and the machine-readable error code contract.
//!
//! DESIGN
//! ======
//! Gating rejections and degenerate calls are not errors; they surface as
//! empty action lists or `Ok(false)`. The only runtime failures are the
//! persistence collaborator's, which the history log propagates untouched
//! after releasing its replay guard. Every variant maps to a stable code
//! and a retry hint so the UI can decide whether to offer "try again".

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::doc::ObjectId;

/// Stable error code plus retry hint.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Failure reported by a persistence collaborator (`delete`, `restore`, `update`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    /// The target object does not exist in the shared store.
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    /// The store refused the write (permissions, lock, stale version).
    #[error("write rejected for {id}: {reason}")]
    Rejected { id: ObjectId, reason: String },

    /// The store could not be reached.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ErrorCode for PersistenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_OBJECT_NOT_FOUND",
            Self::Rejected { .. } => "E_WRITE_REJECTED",
            Self::Transport(_) => "E_TRANSPORT",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

// =============================================================================
// HISTORY
// =============================================================================

/// Failure of an undo or redo replay. The action stays on its source stack.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("replay failed: {0}")]
    Replay(#[from] PersistenceError),
}

impl ErrorCode for HistoryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Replay(_) => "E_HISTORY_REPLAY",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Replay(inner) => inner.retryable(),
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// A configuration value could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The value does not parse as the expected type.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    /// The value parses but is outside the accepted range.
    #[error("{key} out of range: {value} ({expected})")]
    OutOfRange { key: String, value: String, expected: &'static str },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => "E_CONFIG_PARSE",
            Self::OutOfRange { .. } => "E_CONFIG_RANGE",
        }
    }
}
