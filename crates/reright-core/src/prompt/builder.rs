//! Prompt builder.

use reright_protocols::{PromptPayload, PromptVariant, SuggestionRequest};

use super::variants::variant_template;

pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 500;

/// A system instruction and the suggestion count it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    system_prompt: String,
    expected_count: usize,
}

impl PromptTemplate {
    pub fn new(system_prompt: impl Into<String>, expected_count: usize) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            expected_count,
        }
    }

    /// Built-in template for a variant.
    pub fn from_variant(variant: PromptVariant) -> Self {
        variant_template(variant)
    }

    /// Variant template with optional overrides of either part.
    pub fn from_variant_with_overrides(
        variant: PromptVariant,
        system_prompt: Option<&str>,
        expected_count: Option<usize>,
    ) -> Self {
        let base = variant_template(variant);
        Self {
            system_prompt: system_prompt
                .map(str::to_string)
                .unwrap_or(base.system_prompt),
            expected_count: expected_count.unwrap_or(base.expected_count),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn expected_count(&self) -> usize {
        self.expected_count
    }
}

/// Builds [`PromptPayload`]s from validated requests.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    template: PromptTemplate,
    temperature: f32,
    max_output_tokens: u32,
}

impl PromptBuilder {
    pub fn new(template: PromptTemplate) -> Self {
        Self {
            template,
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    pub fn build(&self, request: &SuggestionRequest) -> PromptPayload {
        PromptPayload {
            system_prompt: self.template.system_prompt.clone(),
            user_text: request.text.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
