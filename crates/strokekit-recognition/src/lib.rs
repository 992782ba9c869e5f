//! # StrokeKit Recognition
//!
//! Top of the recognition stack.
//! Routes classified drawings to provider adapters, records results and
//! unexpected errors, applies acceptance thresholds, and wires everything
//! together from configuration at startup.

pub mod bootstrap;
pub mod orchestrator;
pub mod service;

pub use bootstrap::{build_group_adapter, build_orchestrator, build_service, Collaborators};
pub use orchestrator::RecognitionOrchestrator;
pub use service::{DrawingService, RecognitionResponse, SHAPE_INFO_NOT_FOUND, UNKNOWN_PREFAB};
