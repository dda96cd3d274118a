//! In-memory todo store.
//!
//! # Design
//! `TodoStore` is the single authoritative owner of all todo records. Ids are
//! assigned from a monotonically increasing counter starting at 1, so a
//! `BTreeMap` keyed by id yields records in insertion order, so `list` stays
//! stable without a secondary index. Validation lives here, not in the HTTP
//! layer: a failed operation never mutates the collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single todo record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Errors returned by store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given id exists.
    #[error("no todo with id {0}")]
    NotFound(u64),

    /// The operation would leave a record with an empty title.
    #[error("title must not be empty")]
    EmptyTitle,
}

/// Authoritative collection of todo records, keyed by id.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new record under a fresh id. Any id supplied by the caller is
    /// irrelevant here; identity belongs to the store alone.
    pub fn create(&mut self, title: String, completed: bool) -> Result<Todo, StoreError> {
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        self.next_id += 1;
        let todo = Todo {
            id: self.next_id,
            title,
            completed,
        };
        self.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    pub fn get(&self, id: u64) -> Result<Todo, StoreError> {
        self.todos.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    /// Apply the supplied fields to an existing record, leaving omitted
    /// fields untouched.
    pub fn update(
        &mut self,
        id: u64,
        title: Option<String>,
        completed: Option<bool>,
    ) -> Result<Todo, StoreError> {
        if matches!(&title, Some(t) if t.is_empty()) {
            return Err(StoreError::EmptyTitle);
        }
        let todo = self.todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if let Some(title) = title {
            todo.title = title;
        }
        if let Some(completed) = completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        self.todos
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
