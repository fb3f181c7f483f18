//! Test doubles for the gateway and shell seams.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::domain::{ClientError, ClientResult, Task, TaskId, TaskPatch};
use crate::gateway::{MemoryCredentialStore, TodoApi};
use crate::session::Session;
use crate::shell::{Navigator, Prompt, Route};

pub const VALID_TOKEN: &str = "abc123";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Register,
    Login,
    List,
    Create,
    Update,
    Delete,
}

/// One recorded gateway call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Register { name: String, email: String },
    Login { email: String },
    List { token: String },
    Create { token: String, title: String },
    Update { token: String, id: TaskId, patch: TaskPatch },
    Delete { token: String, id: TaskId },
}

/// In-memory server: owns the task list, accepts one token.
#[derive(Default)]
pub struct FakeApi {
    pub tasks: RefCell<Vec<Task>>,
    pub calls: RefCell<Vec<Call>>,
    failures: RefCell<HashMap<Op, ClientError>>,
    list_holds: RefCell<VecDeque<oneshot::Receiver<()>>>,
    next_id: Cell<u32>,
}

impl FakeApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Rc<Self> {
        let api = Self::default();
        *api.tasks.borrow_mut() = tasks;
        Rc::new(api)
    }

    /// Every later call of `op` fails with `err`.
    pub fn fail(&self, op: Op, err: ClientError) {
        self.failures.borrow_mut().insert(op, err);
    }

    /// The next `list_tasks` call waits until the returned sender fires.
    pub fn hold_list(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.list_holds.borrow_mut().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    /// Server-side list, bypassing the call log
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    fn gate(&self, op: Op, token: Option<&str>) -> ClientResult<()> {
        if let Some(err) = self.failures.borrow().get(&op) {
            return Err(err.clone());
        }
        match token {
            Some(t) if t != VALID_TOKEN => Err(ClientError::Unauthorized),
            _ => Ok(()),
        }
    }

    fn not_found() -> ClientError {
        ClientError::RequestFailed {
            status: 404,
            message: Some("Task not found".into()),
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn register(&self, name: &str, email: &str, _password: &str) -> ClientResult<()> {
        self.calls.borrow_mut().push(Call::Register {
            name: name.into(),
            email: email.into(),
        });
        self.gate(Op::Register, None)
    }

    async fn login(&self, email: &str, _password: &str) -> ClientResult<String> {
        self.calls.borrow_mut().push(Call::Login { email: email.into() });
        self.gate(Op::Login, None)?;
        Ok(VALID_TOKEN.to_string())
    }

    async fn list_tasks(&self, token: &str) -> ClientResult<Vec<Task>> {
        self.calls.borrow_mut().push(Call::List { token: token.into() });
        let hold = self.list_holds.borrow_mut().pop_front();
        if let Some(rx) = hold {
            let _ = rx.await;
        }
        self.gate(Op::List, Some(token))?;
        Ok(self.snapshot())
    }

    async fn create_task(&self, token: &str, title: &str) -> ClientResult<Task> {
        self.calls.borrow_mut().push(Call::Create {
            token: token.into(),
            title: title.into(),
        });
        self.gate(Op::Create, Some(token))?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let task = Task::new(format!("new{}", id), title, false);
        self.tasks.borrow_mut().push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, token: &str, id: &TaskId, patch: &TaskPatch) -> ClientResult<Task> {
        self.calls.borrow_mut().push(Call::Update {
            token: token.into(),
            id: id.clone(),
            patch: patch.clone(),
        });
        self.gate(Op::Update, Some(token))?;
        let mut tasks = self.tasks.borrow_mut();
        let task = tasks.iter_mut().find(|t| &t.id == id).ok_or_else(Self::not_found)?;
        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, token: &str, id: &TaskId) -> ClientResult<()> {
        self.calls.borrow_mut().push(Call::Delete {
            token: token.into(),
            id: id.clone(),
        });
        self.gate(Op::Delete, Some(token))?;
        let mut tasks = self.tasks.borrow_mut();
        let before = tasks.len();
        tasks.retain(|t| &t.id != id);
        if tasks.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<Route> {
        self.visits.borrow().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visits.borrow_mut().push(route);
    }
}

/// Answers every confirm with a fixed choice and records alerts.
pub struct ScriptedPrompt {
    pub accept: Cell<bool>,
    pub confirms: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(accept: bool) -> Rc<Self> {
        Rc::new(Self {
            accept: Cell::new(accept),
            confirms: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
        })
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.accept.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Session wired to in-memory collaborators
pub struct Harness {
    pub store: Rc<MemoryCredentialStore>,
    pub navigator: Rc<RecordingNavigator>,
    pub session: Session,
}

impl Harness {
    pub fn new(token: Option<&str>) -> Self {
        let store = Rc::new(match token {
            Some(t) => MemoryCredentialStore::with_token(t),
            None => MemoryCredentialStore::new(),
        });
        let navigator = Rc::new(RecordingNavigator::default());
        let session = Session::restore(store.clone(), navigator.clone());
        Self {
            store,
            navigator,
            session,
        }
    }
}
