//! Adapter construction from credentials and model bindings

use crate::adapter::{ChatAdapter, ProviderAdapter};
use crate::vendors::{AnthropicTransport, GoogleTransport, MistralTransport, OpenAiTransport};
use std::sync::Arc;
use strokekit_core::{ConfigurationError, ModelSpec, Provider};

/// Connection settings for one adapter
#[derive(Debug, Clone, Default)]
pub struct AdapterOptions {
    /// API key; missing or blank disables the adapter
    pub api_key: Option<String>,
    /// Override of the vendor endpoint
    pub base_url: Option<String>,
    /// Models in attempt order; empty disables the adapter
    pub models: Vec<ModelSpec>,
}

/// API key to build an enabled adapter with, or why the adapter is disabled
pub fn check_options(
    provider: Provider,
    options: &AdapterOptions,
) -> Result<String, ConfigurationError> {
    let disabled_because = |reason: &str| ConfigurationError::AdapterDisabled {
        provider: provider.to_string(),
        reason: reason.to_string(),
    };

    let api_key = options
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| disabled_because("no API key"))?;
    if options.models.is_empty() {
        return Err(disabled_because("no models configured"));
    }
    Ok(api_key.to_string())
}

/// Build the HTTP adapter for `provider`
pub fn build_adapter(provider: Provider, options: AdapterOptions) -> Arc<dyn ProviderAdapter> {
    let api_key = match check_options(provider, &options) {
        Ok(key) => key,
        Err(e) => {
            tracing::warn!("{}", e);
            return disabled(provider);
        }
    };

    let base_url = options.base_url;
    let models = options.models;
    match provider {
        Provider::OpenAi => {
            let mut t = OpenAiTransport::new(api_key);
            if let Some(url) = base_url {
                t = t.with_base_url(url);
            }
            Arc::new(ChatAdapter::new(t, models))
        }
        Provider::Google => {
            let mut t = GoogleTransport::new(api_key);
            if let Some(url) = base_url {
                t = t.with_base_url(url);
            }
            Arc::new(ChatAdapter::new(t, models))
        }
        Provider::Anthropic => {
            let mut t = AnthropicTransport::new(api_key);
            if let Some(url) = base_url {
                t = t.with_base_url(url);
            }
            Arc::new(ChatAdapter::new(t, models))
        }
        Provider::Mistral => {
            let mut t = MistralTransport::new(api_key);
            if let Some(url) = base_url {
                t = t.with_base_url(url);
            }
            Arc::new(ChatAdapter::new(t, models))
        }
    }
}

fn disabled(provider: Provider) -> Arc<dyn ProviderAdapter> {
    match provider {
        Provider::OpenAi => Arc::new(ChatAdapter::<OpenAiTransport>::disabled(provider)),
        Provider::Google => Arc::new(ChatAdapter::<GoogleTransport>::disabled(provider)),
        Provider::Anthropic => Arc::new(ChatAdapter::<AnthropicTransport>::disabled(provider)),
        Provider::Mistral => Arc::new(ChatAdapter::<MistralTransport>::disabled(provider)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strokekit_core::ModelConfig;

    fn models() -> Vec<ModelSpec> {
        vec![ModelSpec::new("mistral-large-latest", ModelConfig::default())]
    }

    #[test]
    fn test_missing_key_disables() {
        let adapter = build_adapter(
            Provider::Mistral,
            AdapterOptions {
                api_key: None,
                models: models(),
                ..Default::default()
            },
        );
        assert!(!adapter.is_enabled());
        assert_eq!(adapter.provider(), Provider::Mistral);
    }

    #[test]
    fn test_blank_key_disables() {
        let adapter = build_adapter(
            Provider::OpenAi,
            AdapterOptions {
                api_key: Some("  ".into()),
                models: models(),
                ..Default::default()
            },
        );
        assert!(!adapter.is_enabled());
    }

    #[test]
    fn test_key_and_models_enable() {
        let adapter = build_adapter(
            Provider::Mistral,
            AdapterOptions {
                api_key: Some("secret".into()),
                base_url: Some("http://localhost:9".into()),
                models: models(),
            },
        );
        assert!(adapter.is_enabled());
        assert_eq!(adapter.model_name(), "Mistral_mistral-large-latest");
    }

    #[test]
    fn test_disabled_reason() {
        let err = check_options(
            Provider::Google,
            &AdapterOptions {
                api_key: Some("secret".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::AdapterDisabled {
                provider: "Google".into(),
                reason: "no models configured".into(),
            }
        );

        let err = check_options(Provider::Google, &AdapterOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Google adapter is disabled: no API key");

        let key = check_options(
            Provider::Google,
            &AdapterOptions {
                api_key: Some(" secret ".into()),
                models: models(),
                ..Default::default()
            },
        );
        assert_eq!(key, Ok("secret".to_string()));
    }
}
