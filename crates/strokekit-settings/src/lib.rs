//! StrokeKit Settings Crate
//!
//! Handles application configuration and API key loading.

pub mod config;
pub mod error;
pub mod secrets;

pub use config::{
    CatalogSettings, Config, FeatureSettings, GroupBinding, LoggingSettings, ProviderSettings,
    ProvidersSettings, RoutingSettings, SecretsSettings, DEFAULT_API_KEYS_PATH,
};
pub use error::{SettingsError, SettingsResult};
pub use secrets::ApiKeys;
