//! UI Components
//!
//! The three pages and the dashboard's pieces.

mod dashboard;
mod login_page;
mod new_task_form;
mod register_page;
mod task_row;

pub use dashboard::Dashboard;
pub use login_page::LoginPage;
pub use new_task_form::NewTaskForm;
pub use register_page::RegisterPage;
pub use task_row::TaskRow;
