//! LLM provider identities and per-model configuration
//!
//! Each vendor exposes a small catalog of known models together with the
//! configuration they are called with. Adapters copy the entries they need
//! into an immutable table at construction and never mutate it afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported LLM vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// OpenAI chat completions
    #[serde(alias = "open_ai")]
    OpenAi,
    /// Google Gemini generateContent
    #[serde(alias = "googleai", alias = "gemini")]
    Google,
    /// Anthropic messages
    Anthropic,
    /// Mistral chat completions
    Mistral,
}

impl Provider {
    /// All providers
    pub const ALL: [Provider; 4] = [
        Provider::OpenAi,
        Provider::Google,
        Provider::Anthropic,
        Provider::Mistral,
    ];

    /// Display prefix used in model names (`OpenAI_gpt-4o-mini`)
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Google => "Google",
            Self::Anthropic => "Anthropic",
            Self::Mistral => "Mistral",
        }
    }

    /// Name of the secret holding this provider's API key
    pub fn api_key_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Google => "GOOGLE_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::Mistral => "MISTRAL_API_KEY",
        }
    }

    /// Default API base URL
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Google => "https://generativelanguage.googleapis.com/v1beta",
            Self::Anthropic => "https://api.anthropic.com/v1",
            Self::Mistral => "https://api.mistral.ai/v1",
        }
    }

    /// Known model identifiers, most capable first
    pub fn known_models(&self) -> &'static [&'static str] {
        match self {
            Self::OpenAi => &[
                "chatgpt-4o-latest",
                "gpt-4o-mini",
                "gpt-4-turbo",
                "gpt-3.5-turbo-0125",
            ],
            Self::Google => &["gemini-2.0-flash-exp", "gemini-1.5-flash", "gemini-1.5-pro"],
            Self::Anthropic => &[
                "claude-3-5-sonnet-20241022",
                "claude-3-5-haiku-20241022",
                "claude-3-opus-20240229",
            ],
            Self::Mistral => &["mistral-large-latest", "ministral-8b-latest"],
        }
    }

    /// Check whether the model identifier is in the known catalog
    pub fn is_known_model(&self, model: &str) -> bool {
        self.known_models().contains(&model)
    }

    /// Configuration every model of this vendor starts with
    pub fn default_model_config(&self) -> ModelConfig {
        match self {
            Self::OpenAi | Self::Anthropic => ModelConfig {
                temperature: 1.0,
                ..ModelConfig::default()
            },
            Self::Google | Self::Mistral => ModelConfig {
                temperature: 0.7,
                ..ModelConfig::default()
            },
        }
    }

    /// `"{Provider}_{model}"`
    pub fn model_name(&self, model: Option<&str>) -> String {
        format!("{}_{}", self.display_name(), model.unwrap_or(UNKNOWN_MODEL))
    }
}

/// Model placeholder used when no model produced a response
pub const UNKNOWN_MODEL: &str = "unknown";

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" | "open_ai" => Ok(Self::OpenAi),
            "google" | "googleai" | "gemini" => Ok(Self::Google),
            "anthropic" => Ok(Self::Anthropic),
            "mistral" => Ok(Self::Mistral),
            other => Err(format!("Unknown provider: {}", other)),
        }
    }
}

/// Per-model call configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Completion token limit
    pub max_tokens: u32,
    /// Per-call timeout handed to the transport, in seconds
    pub timeout_secs: u64,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_tokens: 250,
            timeout_secs: 5,
            temperature: 1.0,
        }
    }
}

/// A model identifier bound to its call configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub id: String,
    pub config: ModelConfig,
}

impl ModelSpec {
    pub fn new(id: impl Into<String>, config: ModelConfig) -> Self {
        Self {
            id: id.into(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_format() {
        assert_eq!(
            Provider::OpenAi.model_name(Some("gpt-3.5-turbo-0125")),
            "OpenAI_gpt-3.5-turbo-0125"
        );
        assert_eq!(Provider::Mistral.model_name(None), "Mistral_unknown");
    }

    #[test]
    fn test_vendor_default_temperatures() {
        assert_eq!(Provider::OpenAi.default_model_config().temperature, 1.0);
        assert_eq!(Provider::Anthropic.default_model_config().temperature, 1.0);
        assert_eq!(Provider::Google.default_model_config().temperature, 0.7);
        assert_eq!(Provider::Mistral.default_model_config().temperature, 0.7);
        assert_eq!(Provider::Google.default_model_config().max_tokens, 250);
        assert_eq!(Provider::Google.default_model_config().timeout_secs, 5);
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!("GoogleAI".parse::<Provider>(), Ok(Provider::Google));
        assert_eq!("openai".parse::<Provider>(), Ok(Provider::OpenAi));
        assert!("cohere".parse::<Provider>().is_err());
        assert!(Provider::Google.is_known_model("gemini-1.5-pro"));
        assert!(!Provider::Google.is_known_model("gpt-4o-mini"));
    }
}
