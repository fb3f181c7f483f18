//! Todo Frontend App
//!
//! Builds the client services once per page load and renders the page the
//! URL points at.

use leptos::prelude::*;
use todo_client::{ClientConfig, Route};

use crate::browser::current_route;
use crate::components::{Dashboard, LoginPage, RegisterPage};
use crate::context::{AppContext, Services};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    log::debug!("using API at {}", config.api_base_url);

    let ctx = AppContext::new(Services::new(&config));
    // Provide context to all children
    provide_context(ctx);

    let route = current_route();
    // guard runs before anything protected is rendered
    if route.is_protected() && ctx.session().guard().is_none() {
        return ().into_any();
    }

    match route {
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Register => view! { <RegisterPage /> }.into_any(),
        Route::Dashboard => view! { <Dashboard /> }.into_any(),
    }
}
