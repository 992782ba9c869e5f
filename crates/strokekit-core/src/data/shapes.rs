//! Shape catalog entries
//!
//! The catalog is owned by an external store; recognition only reads it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Patterns that look like a shape but must not be accepted as it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NegativeExamples {
    /// English description of the look-alike patterns
    #[serde(default)]
    pub en: String,
    /// Japanese description of the look-alike patterns
    #[serde(default)]
    pub ja: String,
    /// Look-alikes must score below this percentage
    pub score_threshold: u8,
}

/// Catalog entry for one recognizable shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeInfo {
    /// Stable identifier the model must answer with
    pub shape_id: String,
    /// Prefab spawned by the client when the shape is accepted
    #[serde(default)]
    pub prefab_name: String,
    /// Minimum score for acceptance
    pub threshold: u8,
    pub name_ja: String,
    pub name_en: String,
    pub description_ja: String,
    pub description_en: String,
    /// Look-alike warning for the prompt
    #[serde(default)]
    pub negative_examples: NegativeExamples,
}

impl ShapeInfo {
    /// Acceptance summary for this shape
    pub fn summary(&self) -> ShapeSummary {
        ShapeSummary {
            prefab_name: self.prefab_name.clone(),
            threshold: self.threshold,
        }
    }
}

/// Acceptance data looked up by shape id after recognition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSummary {
    pub prefab_name: String,
    pub threshold: u8,
}

/// Language the model is asked to reason in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese
    #[default]
    Ja,
    /// English
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ja => write!(f, "Japanese"),
            Self::En => write!(f, "English"),
        }
    }
}

/// Ordered set of candidate shapes for one recognition request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeCatalog {
    /// Candidate shapes, in prompt order
    pub shapes: Vec<ShapeInfo>,
    /// Reply language
    #[serde(default)]
    pub locale: Locale,
}

impl ShapeCatalog {
    /// Create a catalog with the default (Japanese) locale
    pub fn new(shapes: Vec<ShapeInfo>) -> Self {
        Self {
            shapes,
            locale: Locale::default(),
        }
    }

    /// Replace the reply locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Look up a shape by id
    pub fn get(&self, shape_id: &str) -> Option<&ShapeInfo> {
        self.shapes.iter().find(|s| s.shape_id == shape_id)
    }

    /// Check whether the catalog contains the id
    pub fn contains(&self, shape_id: &str) -> bool {
        self.get(shape_id).is_some()
    }

    /// Shape ids in catalog order
    pub fn ids(&self) -> Vec<&str> {
        self.shapes.iter().map(|s| s.shape_id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShapeInfo> {
        self.shapes.iter()
    }
}
