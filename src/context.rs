//! Application Context
//!
//! Client services shared with every page via the Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use todo_client::{
    AuthFlow, ClientConfig, ClientError, CredentialStore, HttpTodoApi, Navigator, Prompt,
    Session, TaskList, TodoApi,
};

use crate::browser::{LocalCredentialStore, WindowNavigator, WindowPrompt};

/// Everything a page talks to, built once per page load
#[derive(Clone)]
pub struct Services {
    pub session: Session,
    pub auth: AuthFlow,
    pub tasks: TaskList,
    pub prompt: Rc<dyn Prompt>,
}

impl Services {
    pub fn new(config: &ClientConfig) -> Self {
        let store: Rc<dyn CredentialStore> = Rc::new(LocalCredentialStore::new(&config.token_key));
        let navigator: Rc<dyn Navigator> = Rc::new(WindowNavigator);
        let prompt: Rc<dyn Prompt> = Rc::new(WindowPrompt);
        let api: Rc<dyn TodoApi> = Rc::new(HttpTodoApi::new(config));

        let session = Session::restore(store, navigator);
        let auth = AuthFlow::new(api.clone(), session.clone(), prompt.clone());
        let tasks = TaskList::new(api, session.clone(), prompt.clone());

        Self {
            session,
            auth,
            tasks,
            prompt,
        }
    }
}

/// Copyable handle to the page's services
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Services, LocalStorage>,
}

impl AppContext {
    pub fn new(services: Services) -> Self {
        Self {
            services: StoredValue::new_local(services),
        }
    }

    pub fn session(&self) -> Session {
        self.services.with_value(|s| s.session.clone())
    }

    pub fn auth(&self) -> AuthFlow {
        self.services.with_value(|s| s.auth.clone())
    }

    pub fn tasks(&self) -> TaskList {
        self.services.with_value(|s| s.tasks.clone())
    }

    /// Alerts the user about a failed task action.
    ///
    /// Validation failures are silent and nothing is shown once the session
    /// has ended, since the page is already on its way to the login view.
    pub fn report(&self, err: &ClientError, fallback: &str) {
        if err.is_unauthorized() || matches!(err, ClientError::Validation(_)) {
            return;
        }
        self.services.with_value(|s| {
            if s.session.is_authenticated() {
                s.prompt.alert(&err.user_message(fallback));
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
