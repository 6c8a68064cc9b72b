//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::{ClientBackend, Config};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Collapse into the first error, if any.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(e) => Err(ConfigError::InvalidValue {
                field: e.path,
                message: e.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_relay(config, &mut result);
        Self::validate_prompt(config, &mut result);
        Self::validate_client(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_relay(config: &Config, result: &mut ValidationResult) {
        let relay = &config.relay;

        if relay.word_limit == 0 {
            result.add_error(ValidationError::new(
                "relay.word_limit",
                "word_limit must be greater than 0",
            ));
        }

        if relay.model.is_empty() {
            result.add_error(ValidationError::new("relay.model", "Model cannot be empty"));
        }

        if !relay.base_url.starts_with("http://") && !relay.base_url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "relay.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if relay.api_key.as_deref().is_none_or(str::is_empty) {
            result.add_warning(ValidationWarning::new(
                "relay.api_key",
                "API key is not set; provide it through GEMINI_API_KEY",
            ));
        }

        if relay.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "relay.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }
    }

    fn validate_prompt(config: &Config, result: &mut ValidationResult) {
        let prompt = &config.prompt;

        if !(0.0..=2.0).contains(&prompt.temperature) {
            result.add_error(ValidationError::new(
                "prompt.temperature",
                "temperature must be between 0.0 and 2.0",
            ));
        }

        if prompt.max_output_tokens == 0 {
            result.add_error(ValidationError::new(
                "prompt.max_output_tokens",
                "max_output_tokens must be greater than 0",
            ));
        }

        if prompt.expected_count == Some(0) {
            result.add_error(ValidationError::new(
                "prompt.expected_count",
                "expected_count must be greater than 0",
            ));
        }

        if let Some(ref system_prompt) = prompt.system_prompt {
            if system_prompt.trim().is_empty() {
                result.add_error(ValidationError::new(
                    "prompt.system_prompt",
                    "system_prompt override cannot be blank",
                ));
            } else if prompt.expected_count.is_none() {
                result.add_warning(ValidationWarning::new(
                    "prompt.expected_count",
                    "system_prompt is overridden without expected_count; the variant count is used",
                ));
            }
        }
    }

    fn validate_client(config: &Config, result: &mut ValidationResult) {
        let client = &config.client;

        if client.word_limit == 0 {
            result.add_error(ValidationError::new(
                "client.word_limit",
                "word_limit must be greater than 0",
            ));
        }

        if client.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "client.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }

        match url::Url::parse(&client.relay_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(_) => result.add_error(ValidationError::new(
                "client.relay_url",
                "relay_url must use http or https",
            )),
            Err(e) => result.add_error(ValidationError::new(
                "client.relay_url",
                format!("relay_url is not a valid URL: {}", e),
            )),
        }

        if client.backend == ClientBackend::Gemini && config.relay.api_key.is_none() {
            result.add_warning(ValidationWarning::new(
                "client.backend",
                "gemini backend without relay.api_key; the key must come from the environment",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        if config.logging.dir.trim().is_empty() {
            result.add_error(ValidationError::new("logging.dir", "Log directory cannot be empty"));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
