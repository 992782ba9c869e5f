//! API keys
//!
//! Keys are read once at startup from a `KEY=VALUE` file and handed to the
//! adapter factory. Nothing else reads them.

use crate::config::SecretsSettings;
use crate::error::{SettingsError, SettingsResult};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use strokekit_core::Provider;

/// API keys by secret name (`OPENAI_API_KEY`, ...)
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKeys {
    keys: HashMap<String, String>,
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.keys.keys().collect();
        names.sort();
        f.debug_struct("ApiKeys").field("names", &names).finish()
    }
}

impl ApiKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `KEY=VALUE` lines
    ///
    /// Blank lines, `#` comments and lines without `=` are skipped. The
    /// value is everything after the first `=`.
    pub fn parse(content: &str) -> Self {
        let keys = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        Self { keys }
    }

    /// Read a key file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Secrets {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::parse(&content))
    }

    /// Keys per the secrets settings
    ///
    /// A missing file is not an error: adapters without a key start
    /// disabled. With `env_fallback`, provider keys absent from the file are
    /// taken from environment variables of the same name.
    pub fn load(settings: &SecretsSettings) -> SettingsResult<Self> {
        let path = &settings.api_keys_path;
        let mut keys = if path.exists() {
            let keys = Self::load_from_file(path)?;
            tracing::info!("Loaded {} API key(s) from {}", keys.len(), path.display());
            keys
        } else {
            tracing::warn!("API key file {} not found", path.display());
            Self::new()
        };

        if settings.env_fallback {
            for provider in Provider::ALL {
                let name = provider.api_key_name();
                if keys.get(name).is_none() {
                    if let Ok(value) = std::env::var(name) {
                        keys.insert(name, value);
                    }
                }
            }
        }
        Ok(keys)
    }

    /// Set a key; blank values are ignored
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.trim().is_empty() {
            self.keys.insert(name.into(), value.trim().to_string());
        }
    }

    pub fn with_key(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Key by secret name; blank values count as missing
    pub fn get(&self, name: &str) -> Option<&str> {
        self.keys
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn for_provider(&self, provider: Provider) -> Option<&str> {
        self.get(provider.api_key_name())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
