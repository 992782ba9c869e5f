//! Per-stroke features
//!
//! Each field has a fixed source: bounding box, length, endpoints and
//! closure come from the raw samples, point count from the simplified path.

use crate::geometry::{path_length, simplify};
use serde::{Deserialize, Serialize};
use strokekit_core::{FeatureError, Point3D};

/// Strokes whose endpoints are closer than this are closed
pub const CLOSURE_THRESHOLD: f64 = 0.05;

/// Axis-aligned extent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub height: f64,
    /// Extent along Z
    pub depth: f64,
}

impl BoundingBox {
    /// Extent of a point set; zero for an empty set
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3D>,
    {
        let mut min = Point3D::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3D::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut any = false;
        for p in points {
            any = true;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        if !any {
            return Self::default();
        }
        Self {
            width: max.x - min.x,
            height: max.y - min.y,
            depth: max.z - min.z,
        }
    }
}

/// Features derived from one stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeFeatures {
    /// Number of simplified points
    pub points_count: usize,
    /// Extent of the raw samples
    pub bounding_box: BoundingBox,
    pub start_point: Point3D,
    pub end_point: Point3D,
    /// Length along the raw samples
    pub total_length: f64,
    /// Raw endpoints closer than [`CLOSURE_THRESHOLD`]
    pub is_closed: bool,
    /// Douglas-Peucker output
    pub simplified_points: Vec<Point3D>,
}

impl StrokeFeatures {
    /// Length along the simplified path
    pub fn simplified_length(&self) -> f64 {
        path_length(&self.simplified_points)
    }
}

/// Compute the features of one stroke
///
/// `index` is only used to name the stroke in the error for empty input.
pub fn stroke_features(
    positions: &[Point3D],
    epsilon: f64,
    index: usize,
) -> Result<StrokeFeatures, FeatureError> {
    let (Some(start), Some(end)) = (positions.first(), positions.last()) else {
        return Err(FeatureError::EmptyStroke { index });
    };

    let simplified_points = simplify(positions, epsilon);

    Ok(StrokeFeatures {
        points_count: simplified_points.len(),
        bounding_box: BoundingBox::from_points(positions),
        start_point: *start,
        end_point: *end,
        total_length: path_length(positions),
        is_closed: start.distance_to(end) < CLOSURE_THRESHOLD,
        simplified_points,
    })
}
