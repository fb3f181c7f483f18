//! New Task Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{DashboardStateStoreFields, DashboardStore};

/// Title input plus Add button; disabled while the list is loading
#[component]
pub fn NewTaskForm(store: DashboardStore) -> impl IntoView {
    let ctx = use_app_context();
    let (new_title, set_new_title) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked();
        let tasks = ctx.tasks();

        spawn_local(async move {
            match tasks.add(&title).await {
                Ok(()) => set_new_title.set(String::new()),
                Err(err) => ctx.report(&err, "Failed to add task"),
            }
        });
    };

    view! {
        <form class="add-form" on:submit=add_task>
            <input
                placeholder="What needs to be done?"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || store.loading().get()>
                {move || if store.loading().get() { "Loading..." } else { "Add" }}
            </button>
        </form>
    }
}
