//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! mirror: the task-list view-model owns the state and pushes every change
//! here through `store_sync`.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_client::{EditCursor, Task, TaskListState};

#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Last fetched tasks, server order
    pub tasks: Vec<Task>,
    /// Inline edit in progress
    pub editing: Option<EditCursor>,
    /// A task fetch is in flight
    pub loading: bool,
}

pub type DashboardStore = Store<DashboardState>;

/// Copy a view-model snapshot into the store, touching only changed fields
pub fn store_sync(store: &DashboardStore, state: &TaskListState) {
    if store.tasks().get_untracked() != state.tasks {
        *store.tasks().write() = state.tasks.clone();
    }
    if store.editing().get_untracked() != state.editing {
        *store.editing().write() = state.editing.clone();
    }
    if store.loading().get_untracked() != state.loading {
        *store.loading().write() = state.loading;
    }
}
