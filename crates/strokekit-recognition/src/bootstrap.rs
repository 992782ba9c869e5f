//! Startup wiring
//!
//! Builds adapters from configuration and API keys, binds them to drawing
//! groups, and assembles the drawing service around the collaborators.

use crate::orchestrator::RecognitionOrchestrator;
use crate::service::DrawingService;
use anyhow::Context;
use std::sync::Arc;
use strokekit_core::{
    DrawingGroup, ErrorSink, FeatureSink, MemoryStore, ResultSink, ShapeCatalogLookup,
};
use strokekit_features::FeatureExtractor;
use strokekit_providers::{build_adapter, AdapterOptions, ProviderAdapter};
use strokekit_settings::{ApiKeys, Config};

/// External collaborators the service writes to and reads from
#[derive(Clone)]
pub struct Collaborators {
    pub catalog: Arc<dyn ShapeCatalogLookup>,
    pub results: Arc<dyn ResultSink>,
    pub errors: Arc<dyn ErrorSink>,
    pub features: Arc<dyn FeatureSink>,
}

impl Collaborators {
    /// Every sink backed by one in-memory store
    pub fn in_memory(catalog: Arc<dyn ShapeCatalogLookup>, store: Arc<MemoryStore>) -> Self {
        Self {
            catalog,
            results: store.clone(),
            errors: store.clone(),
            features: store,
        }
    }
}

/// Adapter for one group per the routing table
pub fn build_group_adapter(
    config: &Config,
    keys: &ApiKeys,
    group: DrawingGroup,
) -> Arc<dyn ProviderAdapter> {
    let provider = config.routing.binding(group).provider;
    build_adapter(
        provider,
        AdapterOptions {
            api_key: keys.for_provider(provider).map(str::to_string),
            base_url: config.providers.get(provider).base_url.clone(),
            models: config.model_specs(group),
        },
    )
}

/// Orchestrator with every group bound
pub fn build_orchestrator(
    config: &Config,
    keys: &ApiKeys,
    results: Arc<dyn ResultSink>,
    errors: Arc<dyn ErrorSink>,
) -> RecognitionOrchestrator {
    let mut orchestrator = RecognitionOrchestrator::new(results, errors);
    for group in DrawingGroup::ALL {
        orchestrator = orchestrator.with_adapter(group, build_group_adapter(config, keys, group));
    }

    tracing::info!("Initialized services:");
    for (group, adapter) in orchestrator.bindings() {
        if adapter.is_enabled() {
            tracing::info!("Group {}: {}", group, adapter.model_name());
        } else {
            tracing::warn!("Group {}: {} (disabled)", group, adapter.model_name());
        }
    }
    orchestrator
}

/// Validate the configuration and build the drawing service
pub fn build_service(
    config: &Config,
    keys: &ApiKeys,
    collaborators: Collaborators,
) -> anyhow::Result<DrawingService> {
    config.validate().context("invalid configuration")?;

    let orchestrator =
        build_orchestrator(config, keys, collaborators.results, collaborators.errors);
    Ok(DrawingService::new(
        FeatureExtractor::new(config.features.epsilon),
        orchestrator,
        collaborators.catalog,
        collaborators.features,
    )
    .with_locale(config.catalog.locale))
}
