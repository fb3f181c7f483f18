//! Auth Form Flows
//!
//! Login and registration as the forms drive them: validate, call the
//! gateway, then move the session. Validation failures never reach the API.

use std::rc::Rc;

use crate::domain::{validate_login, validate_registration, ClientResult};
use crate::gateway::TodoApi;
use crate::session::Session;
use crate::shell::{Prompt, Route};

pub const LOGIN_FALLBACK: &str = "Invalid email or password";
pub const REGISTER_FALLBACK: &str = "Registration failed";

#[derive(Clone)]
pub struct AuthFlow {
    api: Rc<dyn TodoApi>,
    session: Session,
    prompt: Rc<dyn Prompt>,
}

impl AuthFlow {
    pub fn new(api: Rc<dyn TodoApi>, session: Session, prompt: Rc<dyn Prompt>) -> Self {
        Self {
            api,
            session,
            prompt,
        }
    }

    /// On success the token is stored and the dashboard opened.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<()> {
        let form = validate_login(email, password)?;
        let token = self.api.login(&form.email, &form.password).await?;
        self.session.sign_in(&token)
    }

    /// On success the user is told and sent to the login page; registering
    /// does not sign in.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ClientResult<()> {
        let form = validate_registration(name, email, password)?;
        self.api
            .register(&form.name, &form.email, &form.password)
            .await?;
        log::info!("registered new account");
        self.prompt.alert("Registration successful");
        self.session.navigate(Route::Login);
        Ok(())
    }
}
