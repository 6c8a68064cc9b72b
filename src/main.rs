//! Reright - stronger rewordings for short phrases.
//!
//! Main entry point for the relay server and the one-shot client.

mod cli;
mod cmd_suggest;
mod server;

use clap::Parser;
use tracing::debug;

use reright_config::ConfigLoader;

use crate::cli::{Cli, Commands};
use crate::cmd_suggest::{check_config, run_suggest};
use crate::server::{init_tracing, resolve_api_key, run_relay};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(&cli.config)?;
    init_tracing(&config.logging)?;
    debug!("Loaded config from {}", cli.config.display());

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let api_key = resolve_api_key(cli.api_key, &config)?;
            run_relay(config, api_key).await
        }
        Commands::Suggest { relay_url, text } => {
            let mut stdout = std::io::stdout();
            run_suggest(&config, cli.api_key, relay_url, &text.join(" "), &mut stdout).await
        }
        Commands::CheckConfig => check_config(&cli.config, &config),
    }
}
