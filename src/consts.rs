//! Shared numeric constants for the interaction core.

// ── History ─────────────────────────────────────────────────────

/// Default bound on each of the undo and redo stacks.
pub const DEFAULT_HISTORY_MAX_SIZE: usize = 50;

// ── Camera ──────────────────────────────────────────────────────

/// Zoom factor at session start.
pub const DEFAULT_ZOOM: f64 = 1.0;

// ── Geometry ────────────────────────────────────────────────────

/// Smallest width/height a resize gesture may produce, in board units.
pub const DEFAULT_MIN_OBJECT_SIZE: f64 = 1.0;

/// Degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Degrees in a half turn; bound of the shortest-path rotation delta.
pub const HALF_TURN_DEG: f64 = 180.0;
