//! Task List View-Model
//!
//! Holds the dashboard's task collection and edit cursor. The list is only
//! ever replaced by a full `list_tasks` result: every successful write is
//! followed by `refresh()`, never by a local patch. Overlapping actions are
//! independent write/refresh pairs and the last refresh to land wins.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::domain::{validate_title, ClientError, ClientResult, Task, TaskId, TaskPatch};
use crate::gateway::TodoApi;
use crate::session::Session;
use crate::shell::Prompt;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this task?";
pub const LOAD_FAILURE: &str = "Failed to load tasks";

/// The single in-progress inline edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCursor {
    pub id: TaskId,
    pub draft: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListState {
    /// Last fetched list, in server order
    pub tasks: Vec<Task>,
    pub editing: Option<EditCursor>,
    /// At least one `list_tasks` call is outstanding
    pub loading: bool,
}

impl TaskListState {
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.editing.as_ref().is_some_and(|c| &c.id == id)
    }
}

type Listener = Rc<dyn Fn(&TaskListState)>;

/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct TaskList {
    api: Rc<dyn TodoApi>,
    session: Session,
    prompt: Rc<dyn Prompt>,
    state: Rc<RefCell<TaskListState>>,
    listener: Rc<RefCell<Option<Listener>>>,
    /// Refreshes started and not yet landed
    in_flight: Rc<Cell<usize>>,
}

impl TaskList {
    pub fn new(api: Rc<dyn TodoApi>, session: Session, prompt: Rc<dyn Prompt>) -> Self {
        Self {
            api,
            session,
            prompt,
            state: Rc::new(RefCell::new(TaskListState::default())),
            listener: Rc::new(RefCell::new(None)),
            in_flight: Rc::new(Cell::new(0)),
        }
    }

    /// Registers the callback run after every state change.
    pub fn on_change(&self, listener: impl Fn(&TaskListState) + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn snapshot(&self) -> TaskListState {
        self.state.borrow().clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.state.borrow().tasks.clone()
    }

    pub fn editing(&self) -> Option<EditCursor> {
        self.state.borrow().editing.clone()
    }

    fn update(&self, f: impl FnOnce(&mut TaskListState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(&snapshot);
        }
    }

    // ========================
    // Fetch
    // ========================

    /// Replaces the list with the server's.
    ///
    /// `Unauthorized` and transport failures end the session so the user is
    /// not stranded on a dead one; any other error leaves the list as it was.
    pub async fn refresh(&self) -> ClientResult<()> {
        let token = self.session.require_token()?;
        self.in_flight.set(self.in_flight.get() + 1);
        self.update(|s| s.loading = true);

        let result = self.api.list_tasks(&token).await;
        self.in_flight.set(self.in_flight.get() - 1);
        let loading = self.in_flight.get() > 0;

        match result {
            Ok(tasks) => {
                log::debug!("fetched {} tasks", tasks.len());
                self.update(move |s| {
                    s.loading = loading;
                    // a cursor on a task that vanished is dropped
                    s.editing = s
                        .editing
                        .take()
                        .filter(|c| tasks.iter().any(|t| t.id == c.id));
                    s.tasks = tasks;
                });
                Ok(())
            }
            Err(err) => {
                self.update(|s| s.loading = loading);
                if err.is_unauthorized() || matches!(err, ClientError::Transport(_)) {
                    self.session.force_logout();
                } else {
                    log::warn!("task refresh failed: {}", err);
                }
                Err(err)
            }
        }
    }

    /// Refresh for display. A server error is alerted as a load failure;
    /// session failures were already handled by `refresh`.
    pub async fn load(&self) {
        if let Err(err @ ClientError::RequestFailed { .. }) = self.refresh().await {
            if self.session.is_authenticated() {
                self.prompt.alert(&err.user_message(LOAD_FAILURE));
            }
        }
    }

    /// Forced logout on `Unauthorized`, otherwise reload after a write.
    ///
    /// The write's outcome is the result: once the server has applied it, a
    /// failing reload is reported by `load` and never as a failed write.
    async fn settle<T>(&self, result: ClientResult<T>) -> ClientResult<()> {
        self.session.observe(result)?;
        self.load().await;
        Ok(())
    }

    // ========================
    // Mutations
    // ========================

    pub async fn add(&self, title: &str) -> ClientResult<()> {
        validate_title(title)?;
        let token = self.session.require_token()?;
        let result = self.api.create_task(&token, title).await;
        self.settle(result).await
    }

    /// Deletes after the user confirms; declining makes no call.
    pub async fn remove(&self, id: &TaskId) -> ClientResult<()> {
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            return Ok(());
        }
        let token = self.session.require_token()?;
        let result = self.api.delete_task(&token, id).await;
        self.settle(result).await
    }

    pub async fn toggle(&self, task: &Task) -> ClientResult<()> {
        let token = self.session.require_token()?;
        let result = self
            .api
            .update_task(&token, &task.id, &TaskPatch::completed(!task.completed))
            .await;
        self.settle(result).await
    }

    // ========================
    // Edit Cursor
    // ========================

    /// Points the cursor at `id` with its current title as the draft.
    pub fn begin_edit(&self, id: &TaskId) {
        self.update(|s| {
            let cursor = s.task(id).map(|task| EditCursor {
                id: task.id.clone(),
                draft: task.title.clone(),
            });
            if cursor.is_some() {
                s.editing = cursor;
            }
        });
    }

    pub fn set_draft(&self, draft: impl Into<String>) {
        let draft = draft.into();
        self.update(move |s| {
            if let Some(cursor) = s.editing.as_mut() {
                cursor.draft = draft;
            }
        });
    }

    pub fn cancel_edit(&self) {
        self.update(|s| s.editing = None);
    }

    /// Saves the draft title. On failure the cursor is kept for a retry.
    pub async fn commit_edit(&self) -> ClientResult<()> {
        let Some(cursor) = self.editing() else {
            return Ok(());
        };
        validate_title(&cursor.draft)?;
        let token = self.session.require_token()?;

        let result = self
            .api
            .update_task(&token, &cursor.id, &TaskPatch::title(cursor.draft.clone()))
            .await;
        self.session.observe(result)?;

        self.update(|s| {
            if s.is_editing(&cursor.id) {
                s.editing = None;
            }
        });
        self.load().await;
        Ok(())
    }
}
