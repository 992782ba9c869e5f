mod common;

use common::*;
use std::io::Write;
use std::sync::Arc;
use strokekit_core::{DrawingGroup, Locale, MemoryStore, Provider, StaticShapeCatalog};
use strokekit_providers::NO_RESPONSE_MESSAGE;
use strokekit_recognition::{build_orchestrator, build_service, Collaborators};
use strokekit_settings::{ApiKeys, Config, GroupBinding, SecretsSettings};

fn collaborators(store: &Arc<MemoryStore>) -> Collaborators {
    Collaborators::in_memory(Arc::new(StaticShapeCatalog::new(shapes())), store.clone())
}

#[test]
fn test_default_bindings() {
    let store = Arc::new(MemoryStore::new());
    let keys = ApiKeys::new()
        .with_key("OPENAI_API_KEY", "sk-test")
        .with_key("GOOGLE_API_KEY", "g-test")
        .with_key("MISTRAL_API_KEY", "m-test");
    let orch = build_orchestrator(&Config::default(), &keys, store.clone(), store.clone());

    let names: Vec<(DrawingGroup, String, bool)> = orch
        .bindings()
        .map(|(g, a)| (g, a.model_name(), a.is_enabled()))
        .collect();
    assert_eq!(
        names,
        vec![
            (DrawingGroup::A, "OpenAI_gpt-3.5-turbo-0125".to_string(), true),
            (DrawingGroup::B, "Google_gemini-1.5-pro".to_string(), true),
            (DrawingGroup::Both, "Mistral_mistral-large-latest".to_string(), true),
        ]
    );
}

#[test]
fn test_missing_keys_disable_adapters() {
    let store = Arc::new(MemoryStore::new());
    let keys = ApiKeys::new().with_key("OPENAI_API_KEY", "sk-test");
    let orch = build_orchestrator(&Config::default(), &keys, store.clone(), store.clone());

    assert!(orch.adapter(DrawingGroup::A).unwrap().is_enabled());
    assert!(!orch.adapter(DrawingGroup::B).unwrap().is_enabled());
    assert!(!orch.adapter(DrawingGroup::Both).unwrap().is_enabled());
}

#[test]
fn test_routing_override_changes_provider() {
    let store = Arc::new(MemoryStore::new());
    let mut config = Config::default();
    config.routing.b = GroupBinding::new(
        Provider::Anthropic,
        &["claude-3-5-sonnet-20241022", "claude-3-5-haiku-20241022"],
    );
    let keys = ApiKeys::new().with_key("ANTHROPIC_API_KEY", "a-test");
    let orch = build_orchestrator(&config, &keys, store.clone(), store.clone());

    let adapter = orch.adapter(DrawingGroup::B).unwrap();
    assert_eq!(adapter.provider(), Provider::Anthropic);
    assert_eq!(adapter.models().len(), 2);
    assert_eq!(adapter.models()[1].id, "claude-3-5-haiku-20241022");
}

#[test]
fn test_invalid_config_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let mut config = Config::default();
    config.features.epsilon = -1.0;
    assert!(build_service(&config, &ApiKeys::new(), collaborators(&store)).is_err());
}

#[tokio::test]
async fn test_service_without_keys_answers_no_response() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut file = std::fs::File::create(dir.path().join(".api_keys")).unwrap();
    writeln!(file, "# no keys yet").unwrap();

    let mut config = Config::default();
    config.catalog.locale = Locale::En;
    config.secrets = SecretsSettings {
        api_keys_path: dir.path().join(".api_keys"),
        env_fallback: false,
    };
    let keys = ApiKeys::load(&config.secrets).unwrap();
    assert!(keys.is_empty());

    let store = Arc::new(MemoryStore::new());
    let svc = build_service(&config, &keys, collaborators(&store)).unwrap();
    let response = svc.handle_drawing(&triangle_drawing()).await.unwrap();

    assert!(!response.success);
    assert_eq!(response.error_message, NO_RESPONSE_MESSAGE);
    assert_eq!(store.features().len(), 1);
    assert!(store.results().is_empty());
}
