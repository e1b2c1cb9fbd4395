//! Client-side interaction and history core for the collaborative whiteboard.
//!
//! Turns pointer gestures into object transforms, keeps objects locked by
//! other collaborators inert, and records user actions in a bounded linear
//! undo/redo log. Rendering, transport and the shared store are the host's
//! concern: the engine returns [`engine::Action`]s and the history log
//! replays through an [`history::ObjectPersistence`] implementation.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Pointer/keyboard/edit entry points returning [`engine::Action`]s |
//! | [`input`] | Interaction state machine and input event types |
//! | [`lock`] | Lock state and the lock gate |
//! | [`gesture`] | Translate, resize, rotate and endpoint resolvers |
//! | [`rotation`] | Pointer-to-angle math and angle normalization |
//! | [`history`] | Undo/redo log and the persistence collaborator trait |
//! | [`doc`] | Board object snapshots, patches and the local store |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`hit`] | Pointer sub-targets (body, handles, endpoints) |
//! | [`config`] | Environment-driven configuration |
//! | [`error`] | Error types and error codes |
//! | [`consts`] | Shared numeric defaults |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod history;
pub mod hit;
pub mod input;
pub mod lock;
pub mod rotation;
