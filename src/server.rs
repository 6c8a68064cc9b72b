//! Tracing setup and relay startup for Reright.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use reright_api::{RelayServer, RelayServerConfig, RelayState};
use reright_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig, PromptConfig};
use reright_core::{PromptBuilder, PromptTemplate};
use reright_provider_gemini::GeminiBackend;

/// The configured log directory with `~` expanded.
pub(crate) fn log_dir(logging: &LoggingConfig) -> PathBuf {
    PathBuf::from(ConfigLoader::expand_path(&logging.dir))
}

/// Initialize tracing with console and file output.
///
/// Log files are written to `[logging].dir` (default ~/.reright/logs/) with
/// daily rotation. Console output goes to stderr so `suggest` keeps stdout
/// for results.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = log_dir(logging);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("reright")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keeps the background writer alive until exit.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(true),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Prompt builder for the configured variant and generation parameters.
pub(crate) fn prompt_builder(prompt: &PromptConfig) -> PromptBuilder {
    let template = PromptTemplate::from_variant_with_overrides(
        prompt.variant,
        prompt.system_prompt.as_deref(),
        prompt.expected_count,
    );
    PromptBuilder::new(template)
        .with_temperature(prompt.temperature)
        .with_max_output_tokens(prompt.max_output_tokens)
}

/// The upstream key: CLI/env first, then the config file.
pub(crate) fn resolve_api_key(
    cli_key: Option<String>,
    config: &Config,
) -> Result<String, Box<dyn std::error::Error>> {
    cli_key
        .or_else(|| config.relay.api_key.clone())
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| "GEMINI_API_KEY is not set (use --api-key or [relay].api_key)".into())
}

/// Build a Gemini backend from the [relay] section.
pub(crate) fn gemini_backend(
    api_key: String,
    config: &Config,
) -> Result<GeminiBackend, Box<dyn std::error::Error>> {
    let backend = GeminiBackend::connect(
        api_key,
        config.relay.base_url.clone(),
        config.relay.model.clone(),
        Duration::from_secs(config.relay.timeout_seconds),
    )?;
    Ok(backend)
}

/// Run the relay in foreground.
pub(crate) async fn run_relay(
    config: Config,
    api_key: String,
) -> Result<(), Box<dyn std::error::Error>> {
    for warning in ConfigValidator::validate(&config).into_result()? {
        warn!("Config: {}: {}", warning.path, warning.message);
    }

    let upstream = gemini_backend(api_key, &config)?;
    let state = RelayState::new(Arc::new(upstream), prompt_builder(&config.prompt))
        .with_word_limit(config.relay.word_limit);

    let server_config = RelayServerConfig::new(config.server.host.clone(), config.server.port);
    info!(
        "Starting relay (variant={:?}, expected_count={})",
        config.prompt.variant,
        state.builder.template().expected_count()
    );

    RelayServer::new(server_config, state).run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reright_protocols::PromptVariant;

    #[test]
    fn test_prompt_builder_uses_variant_and_params() {
        let prompt = PromptConfig {
            variant: PromptVariant::Punchy,
            temperature: 0.3,
            max_output_tokens: 64,
            ..Default::default()
        };
        let builder = prompt_builder(&prompt);
        assert_eq!(builder.template().expected_count(), 3);

        let request = reright_core::validate("go fast", 10).unwrap();
        let payload = builder.build(&request);
        assert_eq!(payload.temperature, 0.3);
        assert_eq!(payload.max_output_tokens, 64);
    }

    #[test]
    fn test_prompt_builder_overrides() {
        let prompt = PromptConfig {
            system_prompt: Some("Custom.".to_string()),
            expected_count: Some(2),
            ..Default::default()
        };
        let builder = prompt_builder(&prompt);
        assert_eq!(builder.template().system_prompt(), "Custom.");
        assert_eq!(builder.template().expected_count(), 2);
    }

    #[test]
    fn test_resolve_api_key_prefers_cli() {
        let mut config = Config::default();
        config.relay.api_key = Some("from-file".to_string());
        assert_eq!(
            resolve_api_key(Some("from-cli".to_string()), &config).unwrap(),
            "from-cli"
        );
        assert_eq!(resolve_api_key(None, &config).unwrap(), "from-file");
    }

    #[test]
    fn test_log_dir_expands_home() {
        let dir = log_dir(&LoggingConfig::default());
        assert!(!dir.starts_with("~"));
        assert!(dir.ends_with(".reright/logs"));

        let custom = LoggingConfig {
            dir: "/var/log/reright".to_string(),
        };
        assert_eq!(log_dir(&custom), PathBuf::from("/var/log/reright"));
    }

    #[test]
    fn test_resolve_api_key_missing() {
        let config = Config::default();
        assert!(resolve_api_key(None, &config).is_err());
        assert!(resolve_api_key(Some("  ".to_string()), &config).is_err());
    }
}
