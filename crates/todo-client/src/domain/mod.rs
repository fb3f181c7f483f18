//! Domain Layer
//!
//! Task entities, the client error taxonomy and form validation.
//! Nothing here performs I/O.

mod error;
mod task;
mod validation;

pub use error::{ClientError, ClientResult};
pub use task::{Task, TaskId, TaskPatch};
pub use validation::{
    validate_login, validate_registration, validate_title, LoginForm, RegisterForm,
};
