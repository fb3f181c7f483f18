//! Task Entity
//!
//! Server-owned to-do entry. The client never mints ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque task identifier assigned by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Task as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Document stores send `_id`, others send `id`
    #[serde(alias = "_id")]
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: TaskId::new(id),
            title: title.into(),
            completed,
        }
    }
}

/// Partial update body for `PUT /tasks/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}
