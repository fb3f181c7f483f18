//! Todo Client Core
//!
//! Session and task-synchronization rules for the todo browser client,
//! independent of the DOM:
//! - domain: tasks, errors, form validation
//! - gateway: credential store and HTTP API seams
//! - session: the Anonymous/Authenticated controller
//! - auth: login and registration flows
//! - task_list: the dashboard view-model

pub mod auth;
pub mod config;
pub mod domain;
pub mod gateway;
pub mod session;
pub mod shell;
pub mod task_list;

#[cfg(test)]
mod testing;

pub use auth::AuthFlow;
pub use config::ClientConfig;
pub use domain::{ClientError, ClientResult, Task, TaskId, TaskPatch};
pub use gateway::{CredentialStore, HttpTodoApi, MemoryCredentialStore, TodoApi};
pub use session::{Session, SessionState};
pub use shell::{Navigator, Prompt, Route};
pub use task_list::{EditCursor, TaskList, TaskListState};
