//! In-memory reference implementation of the todo collection store.
//!
//! Items live in an insertion-ordered `Vec` guarded by an `RwLock`; ids come
//! from a monotonically increasing counter and are never handed out twice,
//! so a delete can never cause an id to be reused.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Insertion-ordered todo storage plus the id counter.
#[derive(Debug)]
pub struct Store {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Store {
    fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    fn insert(&mut self, title: String, description: String) -> Todo {
        let todo = Todo {
            id: self.next_id,
            title,
            description,
            completed: false,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::new()));
    Router::new()
        .route("/", get(service_info))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .route("/todos/status/{completed}", get(list_todos_by_status))
        .route("/test/sample-data", post(add_sample_data))
        .route("/test/clear-all", delete(clear_all))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn service_info(State(db): State<Db>) -> Json<serde_json::Value> {
    let store = db.read().await;
    Json(json!({
        "message": "todo list API",
        "version": env!("CARGO_PKG_VERSION"),
        "total_todos": store.todos.len(),
    }))
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<NewTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut store = db.write().await;
    let todo = store.insert(input.title, input.description);
    tracing::debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    let store = db.read().await;
    store
        .todos
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store
        .todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(description) = input.description {
        todo.description = description;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let before = store.todos.len();
    store.todos.retain(|t| t.id != id);
    if store.todos.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    tracing::debug!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_todos_by_status(
    State(db): State<Db>,
    Path(completed): Path<bool>,
) -> Json<Vec<Todo>> {
    let store = db.read().await;
    let filtered = store
        .todos
        .iter()
        .filter(|t| t.completed == completed)
        .cloned()
        .collect();
    Json(filtered)
}

/// Seed a handful of todos so manual testing starts from a populated list.
async fn add_sample_data(State(db): State<Db>) -> Json<serde_json::Value> {
    let samples = [
        ("Draft the project plan", "Outline milestones for the new project"),
        ("Write API docs", "Document every endpoint with request examples"),
        ("Write test cases", "Cover the CRUD flows end to end"),
        ("Code review", "Walk through the open pull requests with the team"),
        ("Prepare the release", "Check the deployment checklist"),
    ];
    let mut store = db.write().await;
    for (title, description) in samples {
        store.insert(title.to_string(), description.to_string());
    }
    Json(json!({
        "message": format!("added {} sample todos", samples.len()),
        "total_todos": store.todos.len(),
    }))
}

/// Drop everything and restart ids from 1. Test support only.
async fn clear_all(State(db): State<Db>) -> Json<serde_json::Value> {
    let mut store = db.write().await;
    let removed = store.todos.len();
    store.todos.clear();
    store.next_id = 1;
    Json(json!({
        "message": format!("removed {removed} todos"),
        "total_todos": 0,
    }))
}
