// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use gt_cli::{Cli, Commands, Parser};
use gt_rest_client::tags_client;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    cli.logging.init("gt-cli", &config.logging)?;
    tracing::debug!(
        api_base_url = config.network.api_base_url(),
        token = config.auth.token.as_deref().map_or("<none>", |token| gt_logging::redact(token)),
        "configuration loaded"
    );

    let mut stdout = std::io::stdout();
    match cli.command {
        Commands::Tag { subcommand } => {
            let tags = tags_client(&config.network, config.auth_config())?;
            subcommand.run(&tags, &mut stdout).await
        }
        Commands::Config { subcommand } => subcommand.run(&config, &mut stdout),
    }
}
