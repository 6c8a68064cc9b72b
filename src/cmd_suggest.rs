//! One-shot commands: `suggest` and `check-config`.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use reright_backend_relay::RelayBackend;
use reright_config::{ClientBackend, Config, ConfigValidator};
use reright_core::SuggestionPipeline;
use reright_protocols::CompletionBackend;

use crate::server::{gemini_backend, prompt_builder, resolve_api_key};

/// Request suggestions for `text` and write one per line to `out`.
pub(crate) async fn run_suggest<W: Write>(
    config: &Config,
    api_key: Option<String>,
    relay_url: Option<String>,
    text: &str,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend: Arc<dyn CompletionBackend> = match config.client.backend {
        ClientBackend::Relay => {
            let url = relay_url.unwrap_or_else(|| config.client.relay_url.clone());
            let timeout = Duration::from_secs(config.client.timeout_seconds);
            Arc::new(RelayBackend::with_timeout(url, timeout)?)
        }
        ClientBackend::Gemini => {
            let key = resolve_api_key(api_key, config)?;
            Arc::new(gemini_backend(key, config)?)
        }
    };

    let pipeline = SuggestionPipeline::new(
        backend,
        prompt_builder(&config.prompt),
        config.client.word_limit,
    );
    info!(backend = pipeline.backend_id(), "Requesting suggestions");

    let suggestions = pipeline.suggest(text).await?;
    for suggestion in suggestions {
        writeln!(out, "{}", suggestion)?;
    }
    out.flush()?;
    Ok(())
}

/// Validate the config file and report warnings.
pub(crate) fn check_config(path: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config);

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }

    result.into_result()?;
    println!("{}: ok", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "cmd_suggest_tests.rs"]
mod tests;
