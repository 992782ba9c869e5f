use std::io::Write;
use strokekit_core::{DrawingGroup, Locale, Provider};
use strokekit_settings::*;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_toml_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.catalog.locale = Locale::En;
    config.logging.json = true;
    config.routing.b = GroupBinding::new(Provider::Anthropic, &["claude-3-5-haiku-20241022"]);
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = Config::default();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[features]
epsilon = 0.02

[routing.a]
provider = "mistral"
models = ["ministral-8b-latest", "mistral-large-latest"]

[providers.mistral.models.ministral-8b-latest]
max_tokens = 120
timeout_secs = 3
temperature = 0.4
"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.features.epsilon, 0.02);
    assert_eq!(config.routing.a.provider, Provider::Mistral);
    assert_eq!(config.routing.b.provider, Provider::Google);

    let specs = config.model_specs(DrawingGroup::A);
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].config.max_tokens, 120);
    assert_eq!(specs[1].config.max_tokens, 250);
    assert_eq!(specs[1].config.temperature, 0.7);
}

#[test]
fn test_invalid_file_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"features": {{"epsilon": -1.0}}}}"#).unwrap();
    assert!(matches!(
        Config::load_from_file(file.path()),
        Err(SettingsError::InvalidSetting { .. })
    ));
}

#[test]
fn test_unsupported_extension() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().with_extension("yaml");
    assert!(matches!(
        Config::default().save_to_file(&path),
        Err(SettingsError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        Config::load_from_file(&dir.path().join("absent.toml")),
        Err(SettingsError::LoadError(_))
    ));
}

#[test]
fn test_api_keys_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "OPENAI_API_KEY=sk-1\nGOOGLE_API_KEY=g-2").unwrap();

    let settings = SecretsSettings {
        api_keys_path: file.path().to_path_buf(),
        env_fallback: false,
    };
    let keys = ApiKeys::load(&settings).unwrap();
    assert_eq!(keys.for_provider(Provider::OpenAi), Some("sk-1"));
    assert_eq!(keys.for_provider(Provider::Google), Some("g-2"));
    assert_eq!(keys.for_provider(Provider::Anthropic), None);
}

#[test]
fn test_missing_key_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let settings = SecretsSettings {
        api_keys_path: dir.path().join(".api_keys"),
        env_fallback: false,
    };
    assert!(ApiKeys::load(&settings).unwrap().is_empty());
}
