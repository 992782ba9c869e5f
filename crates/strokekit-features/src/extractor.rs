//! Feature extraction for whole drawings

use crate::global::{global_features, GlobalFeatures};
use crate::stroke::{stroke_features, StrokeFeatures};
use serde::{Deserialize, Serialize};
use strokekit_core::{DrawingData, FeatureError};

/// Default Douglas-Peucker tolerance, in world units
pub const DEFAULT_EPSILON: f64 = 0.01;

/// Per-stroke and global features of one drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingFeatures {
    pub strokes: Vec<StrokeFeatures>,
    pub global_features: GlobalFeatures,
}

impl DrawingFeatures {
    /// Sum of raw stroke lengths
    pub fn total_length(&self) -> f64 {
        self.strokes.iter().map(|s| s.total_length).sum()
    }

    /// Serialize for the feature sink
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Turns drawings into [`DrawingFeatures`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureExtractor {
    epsilon: f64,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl FeatureExtractor {
    /// Create an extractor with the given simplification tolerance
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Extract features from every stroke of the drawing
    pub fn extract(&self, drawing: &DrawingData) -> Result<DrawingFeatures, FeatureError> {
        let strokes = drawing
            .strokes
            .iter()
            .enumerate()
            .map(|(i, stroke)| stroke_features(&stroke.positions, self.epsilon, i))
            .collect::<Result<Vec<_>, _>>()?;

        let global_features = global_features(&strokes)?;

        tracing::debug!(
            "Extracted features for drawing {}: {} strokes, {} simplified of {} raw points",
            drawing.drawing_id,
            global_features.total_strokes,
            global_features.total_points,
            drawing.raw_point_count()
        );

        Ok(DrawingFeatures {
            strokes,
            global_features,
        })
    }
}
