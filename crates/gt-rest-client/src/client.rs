// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! reqwest-backed implementation of `ApiConnection`

use std::time::Duration;

use async_trait::async_trait;
use gt_api_contract::ApiErrorBody;
use gt_client_api::{ApiConnection, ClientApiError, ClientApiResult};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, Method, Response};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::auth::AuthConfig;
use crate::error::RestClientResult;
use crate::network_config::NetworkConfig;

const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";
const MAX_PLAIN_ERROR_CHARS: usize = 512;

/// REST connection to the Git hosting service
#[derive(Debug, Clone)]
pub struct RestClient {
    http_client: HttpClient,
    base_url: Url,
    auth: AuthConfig,
}

impl RestClient {
    /// Create a new REST client with default network settings
    pub fn new(base_url: Url, auth: AuthConfig) -> RestClientResult<Self> {
        Self::build(base_url, auth, &NetworkConfig::default())
    }

    /// Create a client from a base URL string
    pub fn from_url(base_url: &str, auth: AuthConfig) -> RestClientResult<Self> {
        Self::new(Url::parse(base_url)?, auth)
    }

    /// Create a client from network configuration
    pub fn from_config(config: &NetworkConfig, auth: AuthConfig) -> RestClientResult<Self> {
        Self::build(Url::parse(config.api_base_url())?, auth, config)
    }

    fn build(base_url: Url, auth: AuthConfig, config: &NetworkConfig) -> RestClientResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));
        default_headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        default_headers.extend(auth.headers()?);

        let mut builder = HttpClient::builder()
            .user_agent(config.user_agent())
            .default_headers(default_headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
            auth,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the authentication config
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Resolve a resource path against the base URL, keeping any base path prefix
    fn endpoint(&self, path: &str) -> ClientApiResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{}/{}", base, path))
            .map_err(|e| ClientApiError::Transport(format!("invalid request URL: {}", e)))
    }

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientApiResult<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.http_client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport_error)?;
        self.handle_response(&method, path, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        response: Response,
    ) -> ClientApiResult<T> {
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(|e| {
                ClientApiError::Transport(format!("malformed response body: {}", e))
            });
        }

        let body = serde_json::from_str::<ApiErrorBody>(&text).unwrap_or_else(|_| ApiErrorBody {
            message: plain_error_message(&text, status.canonical_reason()),
            ..Default::default()
        });
        tracing::warn!(%method, path, status = status.as_u16(), message = %body.message, "request failed");
        Err(ClientApiError::from_status(status.as_u16(), body))
    }
}

/// Message for an error body that is not an API error document, capped at
/// [`MAX_PLAIN_ERROR_CHARS`] characters
fn plain_error_message(text: &str, reason: Option<&str>) -> String {
    let text = text.trim();
    if text.is_empty() {
        return reason.unwrap_or("unknown error").to_string();
    }
    match text.char_indices().nth(MAX_PLAIN_ERROR_CHARS) {
        Some((cut, _)) => format!("{}... (truncated)", &text[..cut]),
        None => text.to_string(),
    }
}

fn transport_error(err: reqwest::Error) -> ClientApiError {
    if err.is_timeout() {
        ClientApiError::Transport(format!("request timed out: {}", err))
    } else {
        ClientApiError::Transport(err.to_string())
    }
}

#[async_trait]
impl ApiConnection for RestClient {
    async fn get<T>(&self, path: &str) -> ClientApiResult<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.request(Method::GET, path, None::<&()>).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> ClientApiResult<T>
    where
        T: DeserializeOwned + Send + 'static,
        B: Serialize + Sync + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }
}
