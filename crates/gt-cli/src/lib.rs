// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::path::PathBuf;

use clap::Subcommand;
use gt_logging::CliLoggingArgs;

pub mod config;
pub mod config_commands;
pub mod tag;

pub use clap::Parser;
pub use config::{ConfigOverrides, GtConfig};

/// Conversion of command-line flags into a configuration layer
pub trait ToJsonOverrides {
    fn to_json_overrides(&self) -> serde_json::Value;
}

#[derive(clap::Parser)]
#[command(
    name = "gt",
    about = "Read and create annotated tag objects through the Git Tags API",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Configuration file layered over the user configuration
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    #[command(flatten)]
    pub overrides: ConfigOverrides,
    #[command(flatten)]
    pub logging: CliLoggingArgs,
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve the effective configuration from files, environment and flags
    pub fn load_config(&self) -> anyhow::Result<GtConfig> {
        let env = |key: &str| std::env::var(key).ok();
        let user_config = config::user_config_path(env);
        config::load_config(
            user_config.as_deref(),
            self.config.as_deref(),
            env,
            &self.overrides,
        )
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Annotated tag objects
    Tag {
        #[command(subcommand)]
        subcommand: tag::TagCommands,
    },
    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        subcommand: config_commands::ConfigCommands,
    },
}
