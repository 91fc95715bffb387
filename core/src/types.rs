//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client crate never links against the server's Axum surface.
//! Integration tests catch any schema drift between the two crates.
//!
//! `Todo` is only ever received, never constructed by clients: `id` and
//! `created_at` exist solely because the server assigned them.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
///
/// `id` and `created_at` are assigned by the server at creation time and are
/// immutable afterwards; every other field may change through an update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Request payload for creating a new todo.
///
/// The server sets `completed` to false and assigns `id` / `createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
