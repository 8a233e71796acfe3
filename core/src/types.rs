//! Client-side DTOs for the todo API.

use serde::{Deserialize, Serialize};

/// A todo as returned by the server. Also the body of an update request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub summary: String,
    pub description: String,
}

/// Payload for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoData {
    pub summary: String,
    pub description: String,
}

impl TodoData {
    pub fn new(summary: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
        }
    }
}

/// The `{"message": ...}` body the server sends with every error.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorMessage {
    pub message: String,
}
