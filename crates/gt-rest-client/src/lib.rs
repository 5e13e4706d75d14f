// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! REST connection for the Git Tags API
//!
//! [`RestClient`] implements [`gt_client_api::ApiConnection`] over HTTPS. It
//! attaches the service's media type, API version and optional bearer token
//! to every request and maps non-success responses onto
//! [`gt_client_api::ClientApiError`].
//!
//! ```no_run
//! use gt_rest_client::{AuthConfig, NetworkConfig, tags_client};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let tags = tags_client(&NetworkConfig::default(), AuthConfig::anonymous())?;
//! let tag = tags.get_by_name("octokit", "octokit.net", "abc123").await?;
//! println!("{} -> {}", tag.tag, tag.object.sha);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod network_config;

pub use auth::*;
pub use client::*;
pub use error::*;
pub use network_config::NetworkConfig;

use gt_client_api::TagsClient;

/// Tags client backed by a freshly configured [`RestClient`]
pub fn tags_client(
    config: &NetworkConfig,
    auth: AuthConfig,
) -> RestClientResult<TagsClient<RestClient>> {
    Ok(TagsClient::new(RestClient::from_config(config, auth)?))
}
