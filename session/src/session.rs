//! Per-session state holder for the todo collection.
//!
//! # Design
//! `TodoSession` owns the session-local mirror of the collection, the edit
//! marker, a busy flag, and at most one visible error message. Every mutation
//! goes through one of its operations: build the request with `TodoClient`,
//! execute it on the `Transport`, and on success overwrite local state with
//! the server's response. The server response is always the source of truth
//! for a single entity — there is no client-side merge beyond replace-by-id.
//!
//! Operations take `&mut self`, so a session processes one action at a time;
//! overlapping actions cannot race and last-response-wins holds by
//! construction. Failures never propagate out of an operation: each one
//! collapses into a fixed per-action banner message, with the underlying
//! detail going to the log.

use todo_core::{ApiError, NewTodo, Todo, TodoClient, UpdateTodo};

use crate::transport::{Transport, TransportError};

/// Banner message shown when loading the collection fails.
pub const LOAD_FAILED: &str = "Could not load todos.";
/// Banner message shown when creating or updating a todo fails.
pub const SUBMIT_FAILED: &str = "Could not save the todo.";
/// Banner message shown when deleting a todo fails.
pub const DELETE_FAILED: &str = "Could not delete the todo.";
/// Banner message shown when changing a todo's completion status fails.
pub const TOGGLE_FAILED: &str = "Could not change the todo's status.";

/// Raw form input for `submit`: what the user typed, before trimming.
#[derive(Debug, Clone, Default)]
pub struct TodoInput {
    pub title: String,
    pub description: String,
}

/// What `submit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new todo was created and prepended to the collection.
    Created,
    /// The todo under edit was updated in place; the edit marker is cleared.
    Updated,
    /// The trimmed title was empty. Nothing was sent; the caller should
    /// report this through a blocking prompt, not the banner.
    EmptyTitle,
    /// The request failed; the banner message is set.
    Failed,
}

/// What `delete_todo` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The todo was deleted remotely and removed locally.
    Deleted,
    /// The user declined the confirmation; nothing happened.
    Declined,
    /// The request failed; the banner message is set.
    Failed,
}

/// Anything that can go wrong between building a request and parsing its
/// response. Only ever logged — the user sees the fixed banner message.
#[derive(Debug, thiserror::Error)]
enum OperationError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The client state holder: local collection, edit marker, busy flag, and
/// current error message, constructed once per session.
pub struct TodoSession<T: Transport> {
    client: TodoClient,
    transport: T,
    todos: Vec<Todo>,
    editing: Option<Todo>,
    busy: bool,
    error: Option<&'static str>,
}

impl<T: Transport> TodoSession<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
            todos: Vec::new(),
            editing: None,
            busy: false,
            error: None,
        }
    }

    /// The session-local mirror of the collection.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// The item currently being edited, if any.
    pub fn editing(&self) -> Option<&Todo> {
        self.editing.as_ref()
    }

    /// True while a network call is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The current banner message, if any.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Clear the banner message.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Fetch the full collection and replace the local copy wholesale.
    /// On failure the prior collection is left untouched.
    pub fn load_todos(&mut self) -> bool {
        let fetched = self.perform(|client, transport| {
            let response = transport.execute(client.build_list_todos())?;
            Ok(client.parse_list_todos(response)?)
        });
        match fetched {
            Ok(todos) => {
                self.todos = todos;
                self.error = None;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "loading todos failed");
                self.error = Some(LOAD_FAILED);
                false
            }
        }
    }

    /// Create a new todo, or update the one under edit if the edit marker is
    /// set. Trims both fields first; an empty trimmed title aborts before any
    /// network traffic.
    pub fn submit(&mut self, input: TodoInput) -> SubmitOutcome {
        let title = input.title.trim();
        if title.is_empty() {
            return SubmitOutcome::EmptyTitle;
        }
        let title = title.to_string();
        let description = input.description.trim().to_string();

        match self.editing.as_ref().map(|t| t.id) {
            Some(id) => {
                let update = UpdateTodo {
                    title: Some(title),
                    description: Some(description),
                    completed: None,
                };
                let updated = self.perform(|client, transport| {
                    let request = client.build_update_todo(id, &update)?;
                    let response = transport.execute(request)?;
                    Ok(client.parse_update_todo(response)?)
                });
                match updated {
                    Ok(todo) => {
                        self.replace_by_id(todo);
                        self.editing = None;
                        self.error = None;
                        SubmitOutcome::Updated
                    }
                    Err(e) => {
                        tracing::error!(id, error = %e, "updating todo failed");
                        self.error = Some(SUBMIT_FAILED);
                        SubmitOutcome::Failed
                    }
                }
            }
            None => {
                let input = NewTodo { title, description };
                let created = self.perform(|client, transport| {
                    let request = client.build_create_todo(&input)?;
                    let response = transport.execute(request)?;
                    Ok(client.parse_create_todo(response)?)
                });
                match created {
                    Ok(todo) => {
                        self.todos.insert(0, todo);
                        self.error = None;
                        SubmitOutcome::Created
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "creating todo failed");
                        self.error = Some(SUBMIT_FAILED);
                        SubmitOutcome::Failed
                    }
                }
            }
        }
    }

    /// Mark the matching local item as the one being edited. Returns false
    /// for an unknown id. No network traffic.
    pub fn begin_edit(&mut self, id: u64) -> bool {
        match self.todos.iter().find(|t| t.id == id) {
            Some(todo) => {
                self.editing = Some(todo.clone());
                true
            }
            None => false,
        }
    }

    /// Clear the edit marker. No network traffic.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Delete a todo after asking `confirm`. A `false` answer is a clean
    /// no-op: no network call, no state change.
    pub fn delete_todo(&mut self, id: u64, confirm: impl FnOnce() -> bool) -> DeleteOutcome {
        if !confirm() {
            return DeleteOutcome::Declined;
        }
        let deleted = self.perform(|client, transport| {
            let response = transport.execute(client.build_delete_todo(id))?;
            Ok(client.parse_delete_todo(response)?)
        });
        match deleted {
            Ok(()) => {
                self.todos.retain(|t| t.id != id);
                self.error = None;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::error!(id, error = %e, "deleting todo failed");
                self.error = Some(DELETE_FAILED);
                DeleteOutcome::Failed
            }
        }
    }

    /// Set a todo's completion status. The update carries only `completed`;
    /// the matching local entry is replaced with the server's response.
    pub fn toggle_completed(&mut self, id: u64, completed: bool) -> bool {
        let update = UpdateTodo {
            completed: Some(completed),
            ..UpdateTodo::default()
        };
        let updated = self.perform(|client, transport| {
            let request = client.build_update_todo(id, &update)?;
            let response = transport.execute(request)?;
            Ok(client.parse_update_todo(response)?)
        });
        match updated {
            Ok(todo) => {
                self.replace_by_id(todo);
                self.error = None;
                true
            }
            Err(e) => {
                tracing::error!(id, error = %e, "toggling todo failed");
                self.error = Some(TOGGLE_FAILED);
                false
            }
        }
    }

    /// Bracket a network round-trip with the busy flag, regardless of outcome.
    fn perform<R>(
        &mut self,
        op: impl FnOnce(&TodoClient, &T) -> Result<R, OperationError>,
    ) -> Result<R, OperationError> {
        self.busy = true;
        let result = op(&self.client, &self.transport);
        self.busy = false;
        result
    }

    fn replace_by_id(&mut self, todo: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *slot = todo;
        }
    }
}
