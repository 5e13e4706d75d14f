// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Network configuration types

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = concat!("gt/", env!("CARGO_PKG_VERSION"));

/// Network configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// API base URL, e.g. `https://github.example.com/api/v3` for an enterprise host
    #[serde(rename = "api-base-url", skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(rename = "user-agent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Whole-request timeout; unset means no client-side timeout
    #[serde(rename = "timeout-secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl NetworkConfig {
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
