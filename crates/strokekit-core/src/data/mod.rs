//! Data models for drawings captured by the VR client
//!
//! This module provides:
//! - 3D points and stroke geometry
//! - Drawing requests as received from the server layer
//! - The shape catalog consulted during recognition
//! - Classification groups used for provider routing

pub mod group;
pub mod shapes;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use group::DrawingGroup;
pub use shapes::{Locale, NegativeExamples, ShapeCatalog, ShapeInfo, ShapeSummary};

/// Point in 3D space, in VR world units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Point3D {
    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point3D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={:.3}, y={:.3}, z={:.3}", self.x, self.y, self.z)
    }
}

/// RGBA stroke color with channels in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// One continuous drawn line
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stroke {
    /// Ordered sample positions
    pub positions: Vec<Point3D>,
    /// Rendering width
    #[serde(default)]
    pub width: f32,
    /// Optional rendering color
    #[serde(default)]
    pub color: Option<Color>,
}

impl Stroke {
    /// Create a stroke from positions with default rendering metadata
    pub fn new(positions: Vec<Point3D>) -> Self {
        Self {
            positions,
            width: 0.0,
            color: None,
        }
    }
}

/// A drawing submitted for recognition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DrawingData {
    /// Drawing identifier assigned by the client
    pub drawing_id: String,
    /// Scene the drawing belongs to; selects the candidate shapes
    pub scene_id: String,
    /// Client (headset) identifier
    #[serde(default)]
    pub client_id: String,
    /// Strokes in drawing order
    #[serde(default, alias = "draw_lines")]
    pub strokes: Vec<Stroke>,
    /// Drawing anchor in world space
    #[serde(default)]
    pub center: Point3D,
    /// Whether the client asked for AI recognition
    #[serde(default = "default_use_ai")]
    pub use_ai: bool,
    /// Client-side timestamp (milliseconds since epoch)
    #[serde(default)]
    pub draw_timestamp: Option<i64>,
}

fn default_use_ai() -> bool {
    true
}

impl DrawingData {
    /// Create a drawing with the given ids and strokes
    pub fn new(drawing_id: impl Into<String>, scene_id: impl Into<String>, strokes: Vec<Stroke>) -> Self {
        Self {
            drawing_id: drawing_id.into(),
            scene_id: scene_id.into(),
            client_id: String::new(),
            strokes,
            center: Point3D::default(),
            use_ai: true,
            draw_timestamp: None,
        }
    }

    /// Total number of raw positions across all strokes
    pub fn raw_point_count(&self) -> usize {
        self.strokes.iter().map(|s| s.positions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point3D::new(0.0, 0.0, 0.0);
        let b = Point3D::new(3.0, 4.0, 12.0);
        assert_eq!(a.distance_to(&b), 13.0);
        assert_eq!(b.distance_to(&a), 13.0);
    }

    #[test]
    fn test_drawing_deserialize_accepts_draw_lines() {
        let json = r#"{
            "drawing_id": "d1",
            "scene_id": "s1",
            "draw_lines": [{"positions": [{"x": 0.0, "y": 1.0, "z": 2.0}], "width": 0.01}]
        }"#;
        let drawing: DrawingData = serde_json::from_str(json).unwrap();
        assert_eq!(drawing.strokes.len(), 1);
        assert_eq!(drawing.strokes[0].positions[0], Point3D::new(0.0, 1.0, 2.0));
        assert!(drawing.use_ai);
        assert_eq!(drawing.raw_point_count(), 1);
    }
}
