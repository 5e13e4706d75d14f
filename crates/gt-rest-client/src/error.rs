// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Errors raised while constructing a REST client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestClientError {
    #[error("Invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication error: {0}")]
    Auth(String),
}

pub type RestClientResult<T> = Result<T, RestClientError>;
