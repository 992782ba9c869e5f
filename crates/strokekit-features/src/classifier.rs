//! Rule-based routing of drawings to provider groups
//!
//! Hand-tuned thresholds over point density and stroke count. Rules are
//! evaluated in order and the first match wins; the ranges overlap, so the
//! order is part of the behavior.

use crate::extractor::DrawingFeatures;
use crate::global::GlobalFeatures;
use crate::stroke::StrokeFeatures;
use serde::{Deserialize, Serialize};
use strokekit_core::DrawingGroup;

/// BOTH: point density strictly above this
pub const BOTH_MIN_POINT_DENSITY: f64 = 6.0;
/// BOTH: point density strictly below this
pub const BOTH_MAX_POINT_DENSITY: f64 = 82.0;
/// BOTH: at least this many strokes
pub const BOTH_MIN_STROKES: usize = 4;
/// BOTH: at most this many strokes
pub const BOTH_MAX_STROKES: usize = 16;

/// B: point density strictly above this
pub const B_MIN_POINT_DENSITY: f64 = 50.0;
/// B: at most this many strokes
pub const B_MAX_STROKES: usize = 2;
/// B: total raw length strictly below this
pub const B_MAX_TOTAL_LENGTH: f64 = 0.2;

/// Values the routing rules are evaluated on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationInputs {
    pub total_points: usize,
    pub total_length: f64,
    /// Simplified points per unit of raw length, 0 without length
    pub point_density: f64,
    pub total_strokes: usize,
}

impl ClassificationInputs {
    /// Derive the rule inputs from extracted features
    pub fn from_features(global: &GlobalFeatures, strokes: &[StrokeFeatures]) -> Self {
        let total_points = global.total_points;
        let total_length: f64 = strokes.iter().map(|s| s.total_length).sum();
        let point_density = if total_length > 0.0 {
            total_points as f64 / total_length
        } else {
            0.0
        };

        Self {
            total_points,
            total_length,
            point_density,
            total_strokes: global.total_strokes,
        }
    }

    /// Apply the routing rules
    pub fn group(&self) -> DrawingGroup {
        let density = self.point_density;
        let strokes = self.total_strokes;

        if density > BOTH_MIN_POINT_DENSITY
            && density < BOTH_MAX_POINT_DENSITY
            && (BOTH_MIN_STROKES..=BOTH_MAX_STROKES).contains(&strokes)
        {
            DrawingGroup::Both
        } else if density > B_MIN_POINT_DENSITY
            || strokes <= B_MAX_STROKES
            || self.total_length < B_MAX_TOTAL_LENGTH
        {
            DrawingGroup::B
        } else {
            DrawingGroup::A
        }
    }
}

/// Pick the provider group for a drawing
pub fn classify(global: &GlobalFeatures, strokes: &[StrokeFeatures]) -> DrawingGroup {
    let inputs = ClassificationInputs::from_features(global, strokes);
    let group = inputs.group();
    tracing::debug!(
        "Classified drawing as group {} (density {:.3}, strokes {}, length {:.3})",
        group,
        inputs.point_density,
        inputs.total_strokes,
        inputs.total_length
    );
    group
}

/// [`classify`] over a full feature set
pub fn classify_features(features: &DrawingFeatures) -> DrawingGroup {
    classify(&features.global_features, &features.strokes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(point_density: f64, total_strokes: usize, total_length: f64) -> ClassificationInputs {
        ClassificationInputs {
            total_points: (point_density * total_length) as usize,
            total_length,
            point_density,
            total_strokes,
        }
    }

    #[test]
    fn test_density_lower_bound_is_exclusive() {
        assert_ne!(inputs(6.0, 4, 10.0).group(), DrawingGroup::Both);
        assert_eq!(inputs(6.0, 4, 10.0).group(), DrawingGroup::A);
        assert_eq!(inputs(6.01, 4, 10.0).group(), DrawingGroup::Both);
    }

    #[test]
    fn test_stroke_range_is_inclusive() {
        assert_eq!(inputs(20.0, 16, 1.0).group(), DrawingGroup::Both);
        assert_eq!(inputs(20.0, 17, 1.0).group(), DrawingGroup::A);
        assert_eq!(inputs(20.0, 3, 1.0).group(), DrawingGroup::A);
    }

    #[test]
    fn test_two_strokes_always_b() {
        for density in [0.0, 10.0, 40.0, 100.0] {
            assert_eq!(inputs(density, 2, 5.0).group(), DrawingGroup::B);
        }
    }

    #[test]
    fn test_density_gate_above_both_range() {
        assert_eq!(inputs(83.0, 10, 1.0).group(), DrawingGroup::B);
        assert_eq!(inputs(82.0, 10, 1.0).group(), DrawingGroup::B);
        assert_eq!(inputs(81.9, 10, 1.0).group(), DrawingGroup::Both);
    }

    #[test]
    fn test_short_total_length_is_b() {
        assert_eq!(inputs(5.0, 20, 0.19).group(), DrawingGroup::B);
        assert_eq!(inputs(5.0, 20, 0.2).group(), DrawingGroup::A);
    }

    #[test]
    fn test_zero_length_has_zero_density() {
        let global = GlobalFeatures {
            total_strokes: 5,
            total_points: 5,
            aspect_ratio: 0.0,
            centroid: Default::default(),
        };
        let i = ClassificationInputs::from_features(&global, &[]);
        assert_eq!(i.point_density, 0.0);
        assert_eq!(i.group(), DrawingGroup::B);
    }
}
