//! Display helpers: completion-status partitioning and date rendering.

use chrono::{DateTime, NaiveDateTime};
use todo_core::Todo;

/// How the collection is grouped for display.
///
/// An empty collection gets its own placeholder state rather than two empty
/// groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoListView {
    Empty,
    Partitioned {
        incomplete: Vec<Todo>,
        completed: Vec<Todo>,
    },
}

/// Split the collection into incomplete and completed groups.
///
/// Both groups keep the original relative order — a stable filter on the
/// `completed` flag, no re-sort.
pub fn partition(todos: &[Todo]) -> TodoListView {
    if todos.is_empty() {
        return TodoListView::Empty;
    }
    let (completed, incomplete) = todos.iter().cloned().partition(|t| t.completed);
    TodoListView::Partitioned {
        incomplete,
        completed,
    }
}

/// The date portion of a todo's creation timestamp, for display.
///
/// Accepts RFC 3339 as well as zone-less ISO timestamps; returns `None` when
/// the value does not parse as either.
pub fn created_date(todo: &Todo) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(&todo.created_at) {
        return Some(dt.date_naive().to_string());
    }
    todo.created_at
        .parse::<NaiveDateTime>()
        .ok()
        .map(|dt| dt.date().to_string())
}
