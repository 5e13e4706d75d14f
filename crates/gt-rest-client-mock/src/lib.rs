// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Mock connection implementing the `ApiConnection` trait for testing
//!
//! [`MockConnection`] never touches the network. Responses are registered
//! per method and path; every request is recorded so tests can assert on the
//! exact method, path and JSON body the client produced.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gt_client_api::{ApiConnection, ClientApiError, ClientApiResult};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tokio::sync::RwLock;

/// HTTP method of a recorded request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockMethod {
    Get,
    Post,
}

impl std::fmt::Display for MockMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MockMethod::Get => write!(f, "GET"),
            MockMethod::Post => write!(f, "POST"),
        }
    }
}

/// A request as seen by the connection
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: MockMethod,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct MockResponse {
    outcome: Result<Value, ClientApiError>,
    delay: Option<Duration>,
}

/// Mock connection with in-memory responses and a request log
#[derive(Debug, Clone, Default)]
pub struct MockConnection {
    responses: Arc<RwLock<HashMap<(MockMethod, String), MockResponse>>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
    /// Applied to every request without its own delay
    default_delay: Option<Duration>,
}

impl MockConnection {
    /// Create a new mock connection without any responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock connection that delays every response
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            default_delay: Some(delay),
            ..Self::new()
        }
    }

    /// Serve `body` for `GET path`
    pub async fn on_get<T: Serialize>(&self, path: &str, body: &T) -> &Self {
        self.register(MockMethod::Get, path, Ok(to_json(body)), None).await
    }

    /// Serve `body` for `GET path` after `delay`
    pub async fn on_get_delayed<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        delay: Duration,
    ) -> &Self {
        self.register(MockMethod::Get, path, Ok(to_json(body)), Some(delay)).await
    }

    /// Serve `body` for `POST path`
    pub async fn on_post<T: Serialize>(&self, path: &str, body: &T) -> &Self {
        self.register(MockMethod::Post, path, Ok(to_json(body)), None).await
    }

    /// Fail `GET path` with `error`
    pub async fn fail_get(&self, path: &str, error: ClientApiError) -> &Self {
        self.register(MockMethod::Get, path, Err(error), None).await
    }

    /// Fail `POST path` with `error`
    pub async fn fail_post(&self, path: &str, error: ClientApiError) -> &Self {
        self.register(MockMethod::Post, path, Err(error), None).await
    }

    /// All requests issued so far, in order
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }

    async fn register(
        &self,
        method: MockMethod,
        path: &str,
        outcome: Result<Value, ClientApiError>,
        delay: Option<Duration>,
    ) -> &Self {
        self.responses
            .write()
            .await
            .insert((method, path.to_string()), MockResponse { outcome, delay });
        self
    }

    async fn respond<T: DeserializeOwned>(
        &self,
        method: MockMethod,
        path: &str,
        body: Option<Value>,
    ) -> ClientApiResult<T> {
        self.requests.write().await.push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });

        let response = self.responses.read().await.get(&(method, path.to_string())).cloned();
        let Some(response) = response else {
            return Err(ClientApiError::NotFound {
                message: format!("no mock response for {} {}", method, path),
            });
        };

        if let Some(delay) = response.delay.or(self.default_delay) {
            tokio::time::sleep(delay).await;
        }

        let value = response.outcome?;
        serde_json::from_value(value)
            .map_err(|e| ClientApiError::Transport(format!("failed to decode mock body: {}", e)))
    }
}

fn to_json<T: Serialize>(body: &T) -> Value {
    serde_json::to_value(body).unwrap_or_else(|e| panic!("mock body must serialize: {}", e))
}

#[async_trait]
impl ApiConnection for MockConnection {
    async fn get<T>(&self, path: &str) -> ClientApiResult<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.respond(MockMethod::Get, path, None).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> ClientApiResult<T>
    where
        T: DeserializeOwned + Send + 'static,
        B: Serialize + Sync + ?Sized,
    {
        let body = serde_json::to_value(body)
            .map_err(|e| ClientApiError::Transport(format!("failed to encode body: {}", e)))?;
        self.respond(MockMethod::Post, path, Some(body)).await
    }
}
