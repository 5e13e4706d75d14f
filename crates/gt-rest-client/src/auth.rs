// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Static credentials attached to every request

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{RestClientError, RestClientResult};

/// Authentication configuration
///
/// Only a pre-issued token is supported; obtaining one is the caller's job.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    token: Option<String>,
}

impl AuthConfig {
    /// Unauthenticated access, sufficient for reading public repositories
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        Self {
            token: (!token.is_empty()).then(|| token.to_string()),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Headers carrying the credentials
    pub fn headers(&self) -> RestClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| RestClientError::Auth(format!("token is not a valid header value: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
