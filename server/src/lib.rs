//! REST façade for the todo store.
//!
//! # Overview
//! Exposes plain resource-per-entity CRUD over `/todos`, backed by an
//! in-memory [`store::TodoStore`], with a static CORS policy so a separately
//! served front-end can call it with credentials.
//!
//! # Design
//! - The store is the only shared state, passed explicitly via
//!   `Router::with_state`; no ambient globals.
//! - Handlers translate verbs/paths into store operations and nothing else;
//!   validation and identity live in the store.
//! - Errors flow out as [`error::ApiError`], rendered as a small structured
//!   JSON body with the matching status code.
//! - Sample data is seeded at router construction, before the listener
//!   serves, controlled by [`config::SeedMode`].

pub mod config;
pub mod cors;
pub mod error;
pub mod seed;
pub mod store;

pub use config::{Config, ConfigError, SeedMode};
pub use error::ApiError;
pub use store::{StoreError, Todo, TodoStore};

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::RwLock};

use cors::CorsPolicy;

/// Wire payload for `POST /todos`. Unknown fields are ignored, including
/// any client-supplied `id`.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Wire payload for `PUT`/`PATCH /todos/{id}`. Omitted fields are left
/// unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

pub type Db = Arc<RwLock<TodoStore>>;

/// Build the router: seeded store, CRUD routes, CORS layer.
pub fn app(config: &Config) -> Router {
    let mut store = TodoStore::new();
    seed::apply(&mut store, config.seed);
    let db: Db = Arc::new(RwLock::new(store));

    let policy = CorsPolicy::new(config.allowed_origin().clone());
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo)
                .put(update_todo)
                .patch(update_todo)
                .delete(delete_todo),
        )
        .layer(middleware::from_fn_with_state(policy, cors::layer))
        .with_state(db)
}

pub async fn run(listener: TcpListener, config: &Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = db.write().await.create(input.title, input.completed)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, ApiError> {
    let todo = db.read().await.get(id)?;
    Ok(Json(todo))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let todo = db.write().await.update(id, input.title, input.completed)?;
    Ok(Json(todo))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, ApiError> {
    db.write().await.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
