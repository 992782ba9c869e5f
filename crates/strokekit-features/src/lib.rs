//! # StrokeKit Features
//!
//! Geometry and routing for 3D VR drawings.
//! Simplifies strokes with Douglas-Peucker, derives per-stroke and
//! drawing-wide features, and routes each drawing to a provider group.

pub mod classifier;
pub mod extractor;
pub mod geometry;
pub mod global;
pub mod stroke;

pub use classifier::{classify, classify_features, ClassificationInputs};
pub use extractor::{DrawingFeatures, FeatureExtractor, DEFAULT_EPSILON};
pub use geometry::{path_length, perpendicular_distance, simplify};
pub use global::{global_features, GlobalFeatures};
pub use stroke::{stroke_features, BoundingBox, StrokeFeatures, CLOSURE_THRESHOLD};
