//! Task Row Component
//!
//! One task: click the title to toggle, or edit inline when the edit cursor
//! points here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::Task;

use crate::context::use_app_context;
use crate::store::{DashboardStateStoreFields, DashboardStore};

#[component]
pub fn TaskRow(task: Task, store: DashboardStore) -> impl IntoView {
    let ctx = use_app_context();

    let id = task.id.clone();
    let is_editing = move || store.editing().get().is_some_and(|c| c.id == id);

    let row_class = if task.completed { "task done" } else { "task" };

    let toggle = {
        let task = task.clone();
        move |_| {
            let task = task.clone();
            let tasks = ctx.tasks();
            spawn_local(async move {
                if let Err(err) = tasks.toggle(&task).await {
                    ctx.report(&err, "Failed to update task");
                }
            });
        }
    };

    let begin_edit = {
        let id = task.id.clone();
        move |_| ctx.tasks().begin_edit(&id)
    };

    let remove = {
        let id = task.id.clone();
        move |_| {
            let id = id.clone();
            let tasks = ctx.tasks();
            spawn_local(async move {
                if let Err(err) = tasks.remove(&id).await {
                    ctx.report(&err, "Failed to delete task");
                }
            });
        }
    };

    let save = move |_| {
        let tasks = ctx.tasks();
        spawn_local(async move {
            if let Err(err) = tasks.commit_edit().await {
                ctx.report(&err, "Failed to update task");
            }
        });
    };

    let draft = move || store.editing().get().map(|c| c.draft).unwrap_or_default();

    view! {
        <div class=row_class>
            <Show
                when=is_editing
                fallback=move || view! {
                    <span on:click=toggle.clone()>{task.title.clone()}</span>
                    <div class="actions">
                        <button class="edit" on:click=begin_edit.clone()>"Edit"</button>
                        <button class="delete" on:click=remove.clone()>"Delete"</button>
                    </div>
                }
            >
                <input
                    class="edit-input"
                    prop:value=draft
                    on:input=move |ev| ctx.tasks().set_draft(event_target_value(&ev))
                />
                <button class="save" on:click=save>"Save"</button>
                <button class="cancel" on:click=move |_| ctx.tasks().cancel_edit()>"Cancel"</button>
            </Show>
        </div>
    }
}
