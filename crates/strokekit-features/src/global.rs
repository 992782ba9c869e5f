//! Drawing-wide aggregation of stroke features

use crate::stroke::{BoundingBox, StrokeFeatures};
use serde::{Deserialize, Serialize};
use strokekit_core::{FeatureError, Point3D};

/// Descriptors over all simplified points of a drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalFeatures {
    pub total_strokes: usize,
    /// Simplified points across all strokes
    pub total_points: usize,
    /// Width / height of the simplified points, 0 when height is 0
    pub aspect_ratio: f64,
    /// Mean of the simplified points
    pub centroid: Point3D,
}

/// Aggregate per-stroke features
pub fn global_features(strokes: &[StrokeFeatures]) -> Result<GlobalFeatures, FeatureError> {
    let points: Vec<&Point3D> = strokes
        .iter()
        .flat_map(|s| s.simplified_points.iter())
        .collect();

    if points.is_empty() {
        return Err(FeatureError::EmptyDrawing);
    }

    let bbox = BoundingBox::from_points(points.iter().copied());
    let aspect_ratio = if bbox.height != 0.0 {
        bbox.width / bbox.height
    } else {
        0.0
    };

    let n = points.len() as f64;
    let (sx, sy, sz) = points
        .iter()
        .fold((0.0, 0.0, 0.0), |(x, y, z), p| (x + p.x, y + p.y, z + p.z));

    Ok(GlobalFeatures {
        total_strokes: strokes.len(),
        total_points: points.len(),
        aspect_ratio,
        centroid: Point3D::new(sx / n, sy / n, sz / n),
    })
}
