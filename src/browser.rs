//! Browser Bindings
//!
//! `localStorage`, `window.location` and the native dialogs behind the
//! client's credential store, navigator and prompt seams.

use gloo_storage::{LocalStorage, Storage};
use todo_client::{ClientError, ClientResult, CredentialStore, Navigator, Prompt, Route};

/// Bearer token kept in `localStorage`; survives reloads, not browsers.
pub struct LocalCredentialStore {
    key: String,
}

impl LocalCredentialStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl CredentialStore for LocalCredentialStore {
    fn get(&self) -> Option<String> {
        LocalStorage::get::<String>(&self.key).ok()
    }

    fn set(&self, token: &str) -> ClientResult<()> {
        LocalStorage::set(&self.key, token).map_err(|e| ClientError::Storage(e.to_string()))
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}

/// Full document navigation, so every page load restores the session anew.
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, route: Route) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to navigate to {}", route.path());
            return;
        };
        if let Err(err) = window.location().set_href(route.path()) {
            log::warn!("navigation to {} failed: {:?}", route.path(), err);
        }
    }
}

/// `window.confirm` / `window.alert`
pub struct WindowPrompt;

impl Prompt for WindowPrompt {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to show alert: {}", message);
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }
}

/// Page addressed by the current URL
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Login)
}
