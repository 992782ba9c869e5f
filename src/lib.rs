//! # StrokeKit
//!
//! Shape recognition for freehand drawings made in 3D VR space.
//!
//! ## Architecture
//!
//! StrokeKit is organized as a workspace with multiple crates:
//!
//! 1. **strokekit-core** - Drawing model, shape catalog, results, errors, sink traits
//! 2. **strokekit-features** - Douglas-Peucker simplification, features, group routing
//! 3. **strokekit-providers** - Prompts, vendor transports, adapters with model fallback
//! 4. **strokekit-settings** - JSON/TOML configuration and API keys
//! 5. **strokekit-recognition** - Orchestrator, drawing service, startup wiring
//! 6. **strokekit** - Command-line runner that integrates all crates
//!
//! ## Features
//!
//! - **Stroke Features**: bounding boxes, lengths, closure, centroid, aspect ratio
//! - **Rule-Based Routing**: point density and stroke count pick a provider group
//! - **Multi-Vendor Support**: OpenAI, Google, Anthropic, Mistral
//! - **Ordered Fallback**: models of a group are tried in turn, one call each
//! - **Threshold Acceptance**: per-shape minimum scores decide the prefab

pub use strokekit_core::{
    DrawingData, DrawingGroup, Error, Point3D, Provider, RecognitionResult, Result, ShapeCatalog,
    ShapeInfo, Stroke,
};
pub use strokekit_features::{classify_features, DrawingFeatures, FeatureExtractor};
pub use strokekit_providers::{build_adapter, ProviderAdapter, PromptBuilder};
pub use strokekit_recognition::{
    build_service, Collaborators, DrawingService, RecognitionOrchestrator, RecognitionResponse,
};
pub use strokekit_settings::{ApiKeys, Config, LoggingSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support, falling back to `settings.level`
/// - Human-readable or JSON lines output
/// - Output on stderr, keeping stdout for command results
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    let json_layer = settings.json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
    });
    let text_layer = (!settings.json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    Ok(())
}
