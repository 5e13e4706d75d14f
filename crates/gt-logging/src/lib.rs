// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized logging utilities for the gt tools
//!
//! Binaries call [`CliLoggingArgs::init`] once at startup. Library crates only
//! emit `tracing` events and never install a subscriber. `RUST_LOG` always
//! takes precedence over the configured default level.

pub mod logging_config;

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub use logging_config::LoggingConfig;
pub use tracing::Level;

/// Output format for log messages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable plaintext format
    #[default]
    Plaintext,
    /// Structured JSON format
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Plaintext => write!(f, "plaintext"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI log level enum for clap integration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CliLogLevel {
    /// Only error conditions
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Errors, warnings, and informational messages
    Info,
    /// All above plus debug information
    Debug,
    /// All above plus detailed tracing
    Trace,
}

impl From<CliLogLevel> for Level {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

impl std::fmt::Display for CliLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliLogLevel::Error => write!(f, "error"),
            CliLogLevel::Warn => write!(f, "warn"),
            CliLogLevel::Info => write!(f, "info"),
            CliLogLevel::Debug => write!(f, "debug"),
            CliLogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Logging flags shared by every binary; use with `#[command(flatten)]`
///
/// Logs go to stderr unless `--log-file` or `--log-dir` is given, so stdout
/// stays reserved for command output.
#[derive(Clone, Debug, Default, clap::Args, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliLoggingArgs {
    #[arg(long, value_enum, global = true, help = "Log verbosity level (default: warn)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<CliLogLevel>,

    #[arg(long, value_enum, global = true, help = "Log output format (default: plaintext)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<LogFormat>,

    #[arg(long, global = true, help = "Directory for log files")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    #[arg(long, global = true, help = "Log filename")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl CliLoggingArgs {
    /// Initialize logging, falling back to `config` for unset flags
    pub fn init(&self, component: &str, config: &LoggingConfig) -> anyhow::Result<()> {
        let level = self.log_level.or(config.level).unwrap_or_default().into();
        let format = self.log_format.or(config.format).unwrap_or_default();

        if self.log_file.is_some() || self.log_dir.is_some() {
            init_to_file(component, level, format, &self.resolve_log_path(component))
        } else {
            init(component, level, format)
        }
    }

    /// Resolve the log file path
    ///
    /// 1. An absolute `log_file` is used as is
    /// 2. A relative `log_file` is placed under `log_dir` when given
    /// 3. Without `log_file`, `<log_dir>/<component>.log` or the platform default
    fn resolve_log_path(&self, component: &str) -> PathBuf {
        match (&self.log_file, &self.log_dir) {
            (Some(file), _) if Path::new(file).is_absolute() => PathBuf::from(file),
            (Some(file), Some(dir)) => Path::new(dir).join(file),
            (Some(file), None) => PathBuf::from(file),
            (None, Some(dir)) => Path::new(dir).join(format!("{}.log", component)),
            (None, None) => standard_log_path(component),
        }
    }
}

/// Platform log location for `component`
///
/// - Linux: `~/.local/share/gt/<component>.log`
/// - macOS: `~/Library/Logs/gt/<component>.log`
/// - Windows: `%APPDATA%\gt\<component>.log`
pub fn standard_log_path(component: &str) -> PathBuf {
    #[cfg(target_os = "macos")]
    let mut path = {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
        path.push("Library");
        path.push("Logs");
        path
    };

    #[cfg(not(target_os = "macos"))]
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(std::env::temp_dir);

    path.push("gt");
    path.push(format!("{}.log", component));
    path
}

/// Initialize logging to stderr
pub fn init(component: &str, default_level: Level, format: LogFormat) -> anyhow::Result<()> {
    init_with_writer(component, default_level, format, io::stderr)
}

/// Initialize logging to a file, creating parent directories as needed
pub fn init_to_file(
    component: &str,
    default_level: Level,
    format: LogFormat,
    log_path: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::OpenOptions::new().create(true).append(true).open(log_path)?;

    init_with_writer(component, default_level, format, log_file)
}

/// Initialize logging with a custom writer
pub fn init_with_writer<W>(
    component: &str,
    default_level: Level,
    format: LogFormat,
    writer: W,
) -> anyhow::Result<()>
where
    W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(component, default_level)));

    match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).json();
            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
        LogFormat::Plaintext => {
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);
            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
    }

    Ok(())
}

/// Filter directive: `default_level` globally and for the workspace crates
fn default_filter(component: &str, level: Level) -> String {
    let component = component.replace('-', "_");
    format!(
        "{level},{component}={level},gt_client_api={level},gt_rest_client={level}",
        level = level,
        component = component
    )
}

/// Placeholder for secrets in structured fields
///
/// ```rust
/// tracing::info!(token = %gt_logging::redact("ghp_secret"), "token configured");
/// ```
pub fn redact(_value: impl std::fmt::Display) -> &'static str {
    "[REDACTED]"
}
