//! In-memory todo registry.
//!
//! # Design
//! One `RwLock` guards both the map and the id counter, so id allocation and
//! insertion happen in the same critical section. Ids start at 1 and are
//! never reused, even after deletion. `TodoStore` is a cheap handle around an
//! `Arc` and is handed to the router as state.

use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::debug;

use crate::types::{Todo, TodoData};

#[derive(Debug)]
struct Registry {
    todos: BTreeMap<i64, Todo>,
    /// `None` once `i64::MAX` has been handed out. Ids never wrap.
    next_id: Option<i64>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: Some(1),
        }
    }
}

/// Shared handle to the todo registry.
#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<Registry>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that hands out `next_id` as its first id.
    #[cfg(test)]
    pub(crate) fn starting_at(next_id: i64) -> Self {
        let registry = Registry {
            todos: BTreeMap::new(),
            next_id: Some(next_id),
        };
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Assign a fresh id to `data` and store the resulting todo. Returns
    /// `None` only after the whole `i64` id range has been used.
    pub async fn create(&self, data: TodoData) -> Option<Todo> {
        let mut registry = self.inner.write().await;
        let id = registry.next_id?;
        registry.next_id = id.checked_add(1);
        let todo = Todo::from_data(id, data);
        registry.todos.insert(id, todo.clone());
        debug!(id, "stored todo");
        Some(todo)
    }

    /// All live todos, in ascending id order.
    pub async fn get_all(&self) -> Vec<Todo> {
        self.inner.read().await.todos.values().cloned().collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Option<Todo> {
        self.inner.read().await.todos.get(&id).cloned()
    }

    /// Replace the todo stored under `id`. The stored value always carries
    /// `id`, whatever `todo.id` says. Returns `None` if nothing is stored
    /// under `id`.
    pub async fn update(&self, id: i64, todo: Todo) -> Option<Todo> {
        let mut registry = self.inner.write().await;
        let slot = registry.todos.get_mut(&id)?;
        *slot = Todo { id, ..todo };
        debug!(id, "replaced todo");
        Some(slot.clone())
    }

    /// Remove and return the todo stored under `id`.
    pub async fn delete(&self, id: i64) -> Option<Todo> {
        let removed = self.inner.write().await.todos.remove(&id);
        if removed.is_some() {
            debug!(id, "removed todo");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
