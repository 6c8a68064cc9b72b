//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use reright_protocols::PromptVariant;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub prompt: PromptConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Relay listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

/// Relay behaviour and upstream model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_relay_word_limit")]
    pub word_limit: usize,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Upstream credential. Held server-side, never serialized back out.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            word_limit: default_relay_word_limit(),
            model: default_model(),
            base_url: default_gemini_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_relay_word_limit() -> usize {
    100
}

fn default_model() -> String {
    "gemini-2.0-flash-lite".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    60
}

/// Prompt variant and generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default)]
    pub variant: PromptVariant,

    /// Replaces the variant's built-in instruction when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    /// Replaces the variant's declared suggestion count when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_count: Option<usize>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            variant: PromptVariant::default(),
            system_prompt: None,
            expected_count: None,
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

fn default_temperature() -> f32 {
    0.8
}

fn default_max_output_tokens() -> u32 {
    500
}

/// Backend used by the one-shot client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientBackend {
    /// POST `{text}` to a relay.
    #[default]
    Relay,
    /// Call Gemini directly with a local key.
    Gemini,
}

/// One-shot client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: ClientBackend,

    #[serde(default = "default_relay_url")]
    pub relay_url: String,

    #[serde(default = "default_client_word_limit")]
    pub word_limit: usize,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: ClientBackend::default(),
            relay_url: default_relay_url(),
            word_limit: default_client_word_limit(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_relay_url() -> String {
    "http://127.0.0.1:8787/".to_string()
}

fn default_client_word_limit() -> usize {
    10
}

/// Log file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory for the daily log files; `~` is expanded.
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> String {
    "~/.reright/logs".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
