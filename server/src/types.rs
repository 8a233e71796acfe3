//! Wire types for the todo API.

use serde::{Deserialize, Serialize};

/// A stored todo. Replaced wholesale on update, never mutated in place by
/// callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub summary: String,
    pub description: String,
}

impl Todo {
    pub fn from_data(id: i64, data: TodoData) -> Self {
        Self {
            id,
            summary: data.summary,
            description: data.description,
        }
    }
}

/// Client-supplied payload for creating a todo. Carries no id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoData {
    pub summary: String,
    pub description: String,
}

/// Body of `PUT /todos/{id}`. The id may be omitted, in which case the path
/// id is used.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateTodo {
    pub id: Option<i64>,
    pub summary: String,
    pub description: String,
}
