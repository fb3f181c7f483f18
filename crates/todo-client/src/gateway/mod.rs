//! Gateway Layer
//!
//! Abstract interfaces for the two external collaborators:
//! - `CredentialStore`: durable home of the bearer token
//! - `TodoApi`: the remote auth + task endpoints
//!
//! Futures are `?Send` because the browser runtime is single-threaded.

mod http;
mod memory;


use async_trait::async_trait;

use crate::domain::{ClientResult, Task, TaskId, TaskPatch};

pub use http::HttpTodoApi;
pub use memory::MemoryCredentialStore;

/// Holds at most one bearer token
pub trait CredentialStore {
    /// Returns the stored token, if any
    fn get(&self) -> Option<String>;

    /// Persists the token, replacing any previous one
    fn set(&self, token: &str) -> ClientResult<()>;

    /// Removes the token
    fn clear(&self);
}

/// The remote API consumed by the client
///
/// Every task operation takes the bearer token explicitly; implementations
/// send it as `Authorization: Bearer <token>`.
#[async_trait(?Send)]
pub trait TodoApi {
    async fn register(&self, name: &str, email: &str, password: &str) -> ClientResult<()>;

    /// Exchanges credentials for a bearer token
    async fn login(&self, email: &str, password: &str) -> ClientResult<String>;

    async fn list_tasks(&self, token: &str) -> ClientResult<Vec<Task>>;

    async fn create_task(&self, token: &str, title: &str) -> ClientResult<Task>;

    async fn update_task(&self, token: &str, id: &TaskId, patch: &TaskPatch) -> ClientResult<Task>;

    async fn delete_task(&self, token: &str, id: &TaskId) -> ClientResult<()>;
}
