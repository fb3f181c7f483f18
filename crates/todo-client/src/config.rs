//! Client Configuration

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every endpoint, e.g. `https://todo.example.com/api`
    pub api_base_url: String,
    /// Key under which the bearer token is persisted
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Default::default()
        }
    }

    /// Defaults overridden by `TODO_API_BASE_URL` / `TODO_TOKEN_KEY` as seen
    /// at compile time. A wasm bundle has no runtime environment to read.
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("TODO_API_BASE_URL"), option_env!("TODO_TOKEN_KEY"))
    }

    fn from_overrides(api_base_url: Option<&str>, token_key: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_base_url.filter(|u| !u.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(key) = token_key.filter(|k| !k.trim().is_empty()) {
            config.token_key = key.trim().to_string();
        }
        config
    }
}
