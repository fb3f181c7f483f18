//! Shell Seams
//!
//! The parts of the browser the client logic drives: where the user is sent
//! and the blocking dialogs it may raise.

/// The three pages of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Unknown paths land on the entry page.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            _ => Route::Login,
        }
    }

    pub fn is_protected(self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

/// Moves the user to another page
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Blocking dialogs
pub trait Prompt {
    /// Returns `true` when the user accepts
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}
