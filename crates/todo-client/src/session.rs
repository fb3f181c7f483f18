//! Session Controller
//!
//! Two-state machine (`Anonymous` / `Authenticated`) over the credential
//! store. The store is the single source of truth for the token; the state is
//! read from it once when the page loads and then moved only by:
//! - `sign_in` after a successful login
//! - `logout` (explicit), `guard` finding no token, or `observe` seeing an
//!   `Unauthorized` error; all three clear the store and return to login
//!
//! There is no refresh transition: a token is used until the server rejects it.

use std::cell::Cell;
use std::rc::Rc;

use crate::domain::{ClientError, ClientResult};
use crate::gateway::CredentialStore;
use crate::shell::{Navigator, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

struct SessionInner {
    store: Rc<dyn CredentialStore>,
    navigator: Rc<dyn Navigator>,
    state: Cell<SessionState>,
}

impl Session {
    /// Reads the store once; called at most once per page load.
    pub fn restore(store: Rc<dyn CredentialStore>, navigator: Rc<dyn Navigator>) -> Self {
        let state = if store.get().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        };
        log::info!("session restored as {:?}", state);
        Self {
            inner: Rc::new(SessionInner {
                store,
                navigator,
                state: Cell::new(state),
            }),
        }
    }

    pub fn state(&self) -> SessionState {
        self.inner.state.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }

    /// Current bearer token, straight from the store
    pub fn token(&self) -> Option<String> {
        self.inner.store.get()
    }

    pub fn navigate(&self, route: Route) {
        self.inner.navigator.navigate(route);
    }

    /// `Anonymous -> Authenticated`: persist the token, open the dashboard.
    pub fn sign_in(&self, token: &str) -> ClientResult<()> {
        self.inner.store.set(token)?;
        self.inner.state.set(SessionState::Authenticated);
        log::info!("signed in");
        self.navigate(Route::Dashboard);
        Ok(())
    }

    /// Explicit logout by the user.
    pub fn logout(&self) {
        log::info!("logged out");
        self.end();
    }

    /// Logout triggered by the server rejecting the session.
    pub fn force_logout(&self) {
        log::warn!("session rejected, forcing logout");
        self.end();
    }

    fn end(&self) {
        self.inner.store.clear();
        self.inner.state.set(SessionState::Anonymous);
        self.navigate(Route::Login);
    }

    /// Entry check for a protected page. Returns the token to use, or ends
    /// the session before anything protected is rendered.
    pub fn guard(&self) -> Option<String> {
        match self.token() {
            Some(token) => {
                self.inner.state.set(SessionState::Authenticated);
                Some(token)
            }
            None => {
                log::info!("no stored credential for protected page");
                self.end();
                None
            }
        }
    }

    /// Token for an authenticated call; a missing token ends the session.
    pub fn require_token(&self) -> ClientResult<String> {
        self.guard().ok_or(ClientError::Unauthorized)
    }

    /// Passes `result` through, forcing logout first if it is `Unauthorized`.
    pub fn observe<T>(&self, result: ClientResult<T>) -> ClientResult<T> {
        if result.as_ref().is_err_and(ClientError::is_unauthorized) {
            self.force_logout();
        }
        result
    }
}
