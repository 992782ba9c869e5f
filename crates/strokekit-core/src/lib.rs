//! # StrokeKit Core
//!
//! Core types, traits, and utilities for StrokeKit.
//! Provides the drawing data model, the shape catalog, the canonical
//! recognition result, the error taxonomy, and the collaborator traits
//! through which the recognition pipeline reaches persistence.

pub mod data;
pub mod error;
pub mod memory;
pub mod provider;
pub mod result;
pub mod sinks;

pub use data::{
    Color, DrawingData, DrawingGroup, Locale, NegativeExamples, Point3D, ShapeCatalog, ShapeInfo,
    ShapeSummary, Stroke,
};

pub use error::{
    ConfigurationError, Error, FeatureError, ParseError, ProviderError, Result, SinkError,
};

pub use memory::{MemoryStore, StaticShapeCatalog};

pub use provider::{ModelConfig, ModelSpec, Provider, UNKNOWN_MODEL};

pub use result::{
    ErrorLogRecord, FeatureRecord, RecognitionResult, ResultDetailRecord, ResultRecord,
};

pub use sinks::{ErrorSink, FeatureSink, ResultSink, ShapeCatalogLookup, SinkResult};
