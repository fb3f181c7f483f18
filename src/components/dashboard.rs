//! Dashboard Page
//!
//! The protected task view. Only rendered once `App` has passed the session
//! guard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{NewTaskForm, TaskRow};
use crate::context::use_app_context;
use crate::store::{store_sync, DashboardState, DashboardStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(DashboardState::default());
    let tasks = ctx.tasks();
    tasks.on_change(move |state| store_sync(&store, state));

    spawn_local(async move { tasks.load().await });

    let logout = move |_| ctx.session().logout();

    view! {
        <div class="page">
            <div class="card">
                <div class="header">
                    <h1>"Todo Dashboard"</h1>
                    <button class="logout" on:click=logout>"Logout"</button>
                </div>

                <NewTaskForm store=store />

                <div class="task-list">
                    <Show when=move || store.tasks().get().is_empty()>
                        <p class="empty">"No tasks yet"</p>
                    </Show>
                    {move || store.tasks().get().into_iter().map(|task| view! {
                        <TaskRow task=task store=store />
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
