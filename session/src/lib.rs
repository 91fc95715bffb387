//! Session-scoped state holder driving the todo API client.
//!
//! # Overview
//! `TodoSession` is the single mutation entry point for a user-facing todo
//! list: it mirrors the server's collection locally, tracks which item is
//! being edited, and surfaces at most one error message at a time. Every
//! operation is one request/response round-trip; on success the server's
//! response overwrites the affected local state, on failure the local state
//! is left untouched and a fixed per-action message is recorded.
//!
//! # Design
//! - The core crate stays I/O-free; the `Transport` trait here supplies the
//!   missing network execution (blocking, via `ureq` in production).
//! - Operations take `&mut self`: one action at a time per session, so
//!   overlapping requests cannot race.
//! - `view` holds the presentation split (status partitioning, dates) with
//!   no state of its own.

pub mod session;
pub mod transport;
pub mod view;

pub use session::{
    DeleteOutcome, SubmitOutcome, TodoInput, TodoSession, DELETE_FAILED, LOAD_FAILED,
    SUBMIT_FAILED, TOGGLE_FAILED,
};
pub use transport::{Transport, TransportError, UreqTransport};
pub use view::{created_date, partition, TodoListView};
