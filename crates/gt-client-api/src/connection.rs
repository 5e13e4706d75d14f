// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Request executor abstraction

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::ClientApiResult;

/// Executes a single request/response exchange against the remote API
///
/// Implementations own the transport: base URL resolution, credentials,
/// (de)serialization and the mapping of non-success statuses onto
/// [`crate::ClientApiError`]. Paths are absolute resource paths such as
/// `/repos/{owner}/{name}/git/tags`.
#[async_trait]
pub trait ApiConnection: Send + Sync {
    /// Issue a `GET` and decode the response body
    async fn get<T>(&self, path: &str) -> ClientApiResult<T>
    where
        T: DeserializeOwned + Send + 'static;

    /// Issue a `POST` with a JSON body and decode the response body
    async fn post<T, B>(&self, path: &str, body: &B) -> ClientApiResult<T>
    where
        T: DeserializeOwned + Send + 'static,
        B: Serialize + Sync + ?Sized;
}
