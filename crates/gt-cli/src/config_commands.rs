// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::io::Write;

use clap::Subcommand;

use crate::config::GtConfig;

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration with secrets redacted
    Show {
        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}

impl ConfigCommands {
    pub fn run<W: Write>(self, config: &GtConfig, out: &mut W) -> anyhow::Result<()> {
        match self {
            ConfigCommands::Show { json } => {
                let redacted = config.redacted();
                let rendered = if json {
                    serde_json::to_string_pretty(&redacted)?
                } else {
                    toml::to_string_pretty(&redacted)?
                };
                writeln!(out, "{}", rendered.trim_end())?;
                Ok(())
            }
        }
    }
}
