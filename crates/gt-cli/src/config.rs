// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Layered configuration for the `gt` binary
//!
//! Layers, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config file (`$GT_HOME/config.toml`, else `<config dir>/gt/config.toml`)
//! 3. File passed with `--config`
//! 4. Environment (`GT_TOKEN` or `GITHUB_TOKEN`, `GT_API_BASE_URL`)
//! 5. Command-line flags (`--api-base-url`, `--token`)
//!
//! Each layer is a JSON value; layers are deep-merged before deserializing.

use std::path::{Path, PathBuf};

use anyhow::Context;
use gt_logging::{CliLogLevel, LogFormat, LoggingConfig};
use gt_rest_client::network_config::{DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT};
use gt_rest_client::{AuthConfig, NetworkConfig};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::ToJsonOverrides;

pub const HOME_ENV: &str = "GT_HOME";
pub const TOKEN_ENV: &str = "GT_TOKEN";
pub const FALLBACK_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const API_BASE_URL_ENV: &str = "GT_API_BASE_URL";

/// Effective configuration of the `gt` binary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtConfig {
    #[serde(flatten)]
    pub network: NetworkConfig,
    #[serde(flatten)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub auth: AuthSection,
}

/// `[auth]` table of the configuration file
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl std::fmt::Debug for AuthSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSection")
            .field("token", &self.token.as_deref().map(|token| gt_logging::redact(token)))
            .finish()
    }
}

impl GtConfig {
    pub fn auth_config(&self) -> AuthConfig {
        match &self.auth.token {
            Some(token) => AuthConfig::with_token(token.as_str()),
            None => AuthConfig::anonymous(),
        }
    }

    /// Copy safe to print: the token, if any, is replaced
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.auth.token = self
            .auth
            .token
            .as_deref()
            .map(|token| gt_logging::redact(token).to_string());
        config
    }
}

/// Flags that override configuration values
#[derive(Clone, Debug, Default, clap::Args)]
pub struct ConfigOverrides {
    /// API base URL, e.g. https://github.example.com/api/v3
    #[arg(long, global = true, value_name = "URL")]
    pub api_base_url: Option<String>,
    /// Bearer token used to authenticate requests
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,
}

impl ToJsonOverrides for ConfigOverrides {
    fn to_json_overrides(&self) -> Value {
        let mut layer = Map::new();
        if let Some(url) = &self.api_base_url {
            layer.insert("api-base-url".into(), json!(url));
        }
        if let Some(token) = &self.token {
            layer.insert("auth".into(), json!({ "token": token }));
        }
        Value::Object(layer)
    }
}

/// Load and merge every configuration layer
///
/// A missing user file is skipped; a missing `--config` file is an error.
pub fn load_config<E>(
    user_config: Option<&Path>,
    cli_config: Option<&Path>,
    env: E,
    overrides: &ConfigOverrides,
) -> anyhow::Result<GtConfig>
where
    E: Fn(&str) -> Option<String>,
{
    let mut merged = defaults_layer();

    if let Some(path) = user_config.filter(|path| path.is_file()) {
        merge_two_json(&mut merged, read_toml_layer(path)?);
    }
    if let Some(path) = cli_config {
        merge_two_json(&mut merged, read_toml_layer(path)?);
    }
    merge_two_json(&mut merged, env_layer(env));
    merge_two_json(&mut merged, overrides.to_json_overrides());

    serde_json::from_value(merged).context("invalid configuration")
}

/// User configuration file location
pub fn user_config_path<E>(env: E) -> Option<PathBuf>
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(home) = env(HOME_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(home).join("config.toml"));
    }

    let config_dir = env("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| env("HOME").map(|home| PathBuf::from(home).join(".config")))
        .or_else(dirs::config_dir)?;
    Some(config_dir.join("gt").join("config.toml"))
}

fn defaults_layer() -> Value {
    json!({
        "api-base-url": DEFAULT_API_BASE_URL,
        "user-agent": DEFAULT_USER_AGENT,
        "log-level": CliLogLevel::default(),
        "log-format": LogFormat::default(),
    })
}

fn read_toml_layer(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config file {}", path.display()))
}

fn env_layer<E>(env: E) -> Value
where
    E: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    let mut layer = Map::new();
    if let Some(url) = non_empty(API_BASE_URL_ENV) {
        layer.insert("api-base-url".into(), json!(url));
    }
    if let Some(token) = non_empty(TOKEN_ENV).or_else(|| non_empty(FALLBACK_TOKEN_ENV)) {
        layer.insert("auth".into(), json!({ "token": token }));
    }
    Value::Object(layer)
}

/// Deep-merge `layer` into `base`
///
/// Objects merge recursively, a null on the right keeps the left value,
/// anything else replaces it.
pub fn merge_two_json(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Object(a), Value::Object(b)) => {
            for (k, v) in b {
                merge_two_json(a.entry(k).or_insert(Value::Null), v);
            }
        }
        (_, Value::Null) => {}
        (a, b) => *a = b,
    }
}
