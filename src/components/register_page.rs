//! Register Page
//!
//! Creates an account, then sends the user back to log in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::auth::REGISTER_FALLBACK;

use crate::context::use_app_context;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        let auth = ctx.auth();

        set_error.set(String::new());
        set_loading.set(true);
        spawn_local(async move {
            if let Err(err) = auth.register(&name, &email, &password).await {
                set_error.set(err.user_message(REGISTER_FALLBACK));
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-wrapper">
            <div class="auth-card">
                <h2>"Create Account"</h2>

                <Show when=move || !error.get().is_empty()>
                    <p class="error-text">{move || error.get()}</p>
                </Show>

                <form on:submit=submit>
                    <input
                        name="name"
                        placeholder="Full Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        name="email"
                        type="email"
                        placeholder="Email Address"
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
                        {move || if loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <p class="footer-text">
                    "Already have an account? " <a href="/">"Login"</a>
                </p>
            </div>
        </div>
    }
}
