//! HTTP Gateway
//!
//! `reqwest` implementation of `TodoApi`. On `wasm32` reqwest rides on the
//! browser's `fetch`, on the host it uses hyper, so the same code is exercised
//! by the tests.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::TodoApi;
use crate::config::ClientConfig;
use crate::domain::{ClientError, ClientResult, Task, TaskId, TaskPatch};

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

// ========================
// Wire Structs
// ========================

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginReply {
    token: String,
}

#[derive(Serialize)]
struct CreateTaskBody<'a> {
    title: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn task_url(&self, id: &TaskId) -> String {
        self.url(&format!("/tasks/{}", utf8_percent_encode(id.as_str(), PATH_SEGMENT)))
    }

    /// Sends a request that carries no credential.
    async fn send_public(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await.map_err(transport)?;
        check_status(response, false).await
    }

    /// Sends a request with the bearer token attached.
    async fn send_authorized(&self, request: RequestBuilder, token: &str) -> ClientResult<Response> {
        let response = request.bearer_auth(token).send().await.map_err(transport)?;
        check_status(response, true).await
    }
}

fn transport(err: reqwest::Error) -> ClientError {
    log::warn!("request did not complete: {}", err);
    ClientError::Transport(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Transport(format!("unreadable response: {}", e)))
}

/// Maps a non-2xx response onto the error taxonomy.
///
/// A 401 only means "session rejected" when a token was sent; on the auth
/// endpoints it is an ordinary failure whose message is shown to the user.
async fn check_status(response: Response, authenticated: bool) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if authenticated && status == StatusCode::UNAUTHORIZED {
        log::warn!("{} rejected the bearer token", response.url().path());
        return Err(ClientError::Unauthorized);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());

    log::warn!("request failed with {}: {:?}", status, message);
    Err(ClientError::RequestFailed {
        status: status.as_u16(),
        message,
    })
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn register(&self, name: &str, email: &str, password: &str) -> ClientResult<()> {
        log::debug!("POST /auth/register");
        let request = self
            .client
            .post(self.url("/auth/register"))
            .json(&RegisterBody { name, email, password });
        self.send_public(request).await?;
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> ClientResult<String> {
        log::debug!("POST /auth/login");
        let request = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginBody { email, password });
        let reply: LoginReply = decode(self.send_public(request).await?).await?;
        Ok(reply.token)
    }

    async fn list_tasks(&self, token: &str) -> ClientResult<Vec<Task>> {
        log::debug!("GET /tasks");
        let request = self.client.get(self.url("/tasks"));
        decode(self.send_authorized(request, token).await?).await
    }

    async fn create_task(&self, token: &str, title: &str) -> ClientResult<Task> {
        log::debug!("POST /tasks");
        let request = self
            .client
            .post(self.url("/tasks"))
            .json(&CreateTaskBody { title });
        decode(self.send_authorized(request, token).await?).await
    }

    async fn update_task(&self, token: &str, id: &TaskId, patch: &TaskPatch) -> ClientResult<Task> {
        log::debug!("PUT /tasks/{}", id);
        let request = self.client.put(self.task_url(id)).json(patch);
        decode(self.send_authorized(request, token).await?).await
    }

    async fn delete_task(&self, token: &str, id: &TaskId) -> ClientResult<()> {
        log::debug!("DELETE /tasks/{}", id);
        let request = self.client.delete(self.task_url(id));
        self.send_authorized(request, token).await?;
        Ok(())
    }
}
