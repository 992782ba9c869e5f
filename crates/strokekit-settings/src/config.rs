//! Configuration for StrokeKit
//!
//! Supports JSON and TOML files. Every section has defaults, so a file only
//! needs the values it changes.
//!
//! Configuration is organized into sections:
//! - Feature extraction (simplification tolerance)
//! - Routing (provider and model list per drawing group)
//! - Providers (endpoint and per-model call settings)
//! - Catalog (reply locale)
//! - Secrets (API key file)
//! - Logging

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use strokekit_core::{ConfigurationError, DrawingGroup, Locale, ModelConfig, ModelSpec, Provider};

/// Default location of the API key file
pub const DEFAULT_API_KEYS_PATH: &str = "/app/secrets/.api_keys";

/// Feature extraction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSettings {
    /// Douglas-Peucker tolerance in world units
    pub epsilon: f64,
}

impl Default for FeatureSettings {
    fn default() -> Self {
        Self { epsilon: 0.01 }
    }
}

/// Provider and ordered model list bound to one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBinding {
    pub provider: Provider,
    /// Model identifiers in attempt order
    pub models: Vec<String>,
}

impl GroupBinding {
    pub fn new(provider: Provider, models: &[&str]) -> Self {
        Self {
            provider,
            models: models.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Group to provider bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingSettings {
    pub a: GroupBinding,
    pub b: GroupBinding,
    pub both: GroupBinding,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            a: GroupBinding::new(Provider::OpenAi, &["gpt-3.5-turbo-0125"]),
            b: GroupBinding::new(Provider::Google, &["gemini-1.5-pro"]),
            both: GroupBinding::new(Provider::Mistral, &["mistral-large-latest"]),
        }
    }
}

impl RoutingSettings {
    /// Binding for a group
    pub fn binding(&self, group: DrawingGroup) -> &GroupBinding {
        match group {
            DrawingGroup::A => &self.a,
            DrawingGroup::B => &self.b,
            DrawingGroup::Both => &self.both,
        }
    }
}

/// Endpoint and model overrides for one vendor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Replaces the vendor's default API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Per-model call settings; models not listed use the vendor default
    pub models: BTreeMap<String, ModelConfig>,
}

/// Settings for every vendor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersSettings {
    pub openai: ProviderSettings,
    pub google: ProviderSettings,
    pub anthropic: ProviderSettings,
    pub mistral: ProviderSettings,
}

impl ProvidersSettings {
    pub fn get(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::OpenAi => &self.openai,
            Provider::Google => &self.google,
            Provider::Anthropic => &self.anthropic,
            Provider::Mistral => &self.mistral,
        }
    }
}

/// Shape catalog settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Language the models are asked to reason in
    pub locale: Locale,
}

/// Where API keys come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretsSettings {
    /// `KEY=VALUE` file
    pub api_keys_path: PathBuf,
    /// Fill keys missing from the file from environment variables
    pub env_fallback: bool,
}

impl Default for SecretsSettings {
    fn default() -> Self {
        Self {
            api_keys_path: PathBuf::from(DEFAULT_API_KEYS_PATH),
            env_fallback: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub features: FeatureSettings,
    pub routing: RoutingSettings,
    pub providers: ProvidersSettings,
    pub catalog: CatalogSettings,
    pub secrets: SecretsSettings,
    pub logging: LoggingSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Default config file location (`<config dir>/strokekit/config.toml`)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("strokekit");
        path.push("config.toml");
        path
    }

    /// Load and validate config from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate and save config to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.features.epsilon <= 0.0 || !self.features.epsilon.is_finite() {
            return Err(SettingsError::invalid("features.epsilon", "must be > 0"));
        }

        for provider in Provider::ALL {
            let key = provider.to_string().to_ascii_lowercase();
            for (model, config) in &self.providers.get(provider).models {
                validate_model_config(&format!("providers.{}.models.{}", key, model), config)?;
            }
        }

        for group in DrawingGroup::ALL {
            let key = format!("routing.{}", group.label().to_ascii_lowercase());
            let binding = self.routing.binding(group);
            if binding.models.is_empty() {
                return Err(SettingsError::invalid(key, "model list must not be empty"));
            }
            let overrides = &self.providers.get(binding.provider).models;
            for model in &binding.models {
                if !binding.provider.is_known_model(model) && !overrides.contains_key(model) {
                    return Err(ConfigurationError::UnknownModel {
                        provider: binding.provider.to_string(),
                        model: model.clone(),
                    }
                    .into());
                }
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::invalid("logging.level", "must not be empty"));
        }

        Ok(())
    }

    /// Call configuration for one model of a vendor
    pub fn model_config(&self, provider: Provider, model: &str) -> ModelConfig {
        self.providers
            .get(provider)
            .models
            .get(model)
            .copied()
            .unwrap_or_else(|| provider.default_model_config())
    }

    /// Ordered model table for a group, resolved once at startup
    pub fn model_specs(&self, group: DrawingGroup) -> Vec<ModelSpec> {
        let binding = self.routing.binding(group);
        binding
            .models
            .iter()
            .map(|m| ModelSpec::new(m.clone(), self.model_config(binding.provider, m)))
            .collect()
    }
}

fn validate_model_config(key: &str, config: &ModelConfig) -> SettingsResult<()> {
    if config.max_tokens == 0 {
        return Err(SettingsError::invalid(
            format!("{}.max_tokens", key),
            "must be > 0",
        ));
    }
    if config.timeout_secs == 0 {
        return Err(SettingsError::invalid(
            format!("{}.timeout_secs", key),
            "must be > 0",
        ));
    }
    if !(0.0..=2.0).contains(&config.temperature) {
        return Err(SettingsError::invalid(
            format!("{}.temperature", key),
            "must be between 0 and 2",
        ));
    }
    Ok(())
}
