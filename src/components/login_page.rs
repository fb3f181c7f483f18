//! Login Page
//!
//! Email + password form. On success the session stores the token and
//! navigates to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::auth::LOGIN_FALLBACK;

use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let password = password.get_untracked();
        let auth = ctx.auth();

        set_error.set(String::new());
        set_loading.set(true);
        spawn_local(async move {
            if let Err(err) = auth.login(&email, &password).await {
                set_error.set(err.user_message(LOGIN_FALLBACK));
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-wrapper">
            <div class="auth-card">
                <h2>"Welcome Back"</h2>
                <p class="subtitle">"Login to manage your tasks"</p>

                <Show when=move || !error.get().is_empty()>
                    <p class="error-text">{move || error.get()}</p>
                </Show>

                <form on:submit=submit>
                    <input
                        name="email"
                        type="email"
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        name="password"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <p class="footer-text">
                    "New user? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
