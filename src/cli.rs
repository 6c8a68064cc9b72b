//! CLI definitions for Reright.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Reright CLI.
#[derive(Parser)]
#[command(name = "reright")]
#[command(about = "Stronger rewordings for short phrases")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Upstream Gemini API key (overrides [relay].api_key)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the HTTP relay in foreground
    Serve {
        /// Listen host (overrides [server].host)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides [server].port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Request suggestions for one phrase and print them
    Suggest {
        /// Relay URL (overrides [client].relay_url)
        #[arg(long)]
        relay_url: Option<String>,

        /// The phrase to rewrite
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Validate the configuration file
    CheckConfig,
}
