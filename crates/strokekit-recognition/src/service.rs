//! Drawing service
//!
//! Entry points for the outer server layer: feature extraction, the core
//! recognition call, and the full request flow that applies the shape's
//! acceptance threshold and answers with a prefab for the client.

use crate::orchestrator::RecognitionOrchestrator;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strokekit_core::{
    DrawingData, FeatureError, FeatureRecord, FeatureSink, Locale, RecognitionResult, Result,
    ShapeCatalog, ShapeCatalogLookup,
};
use strokekit_features::{DrawingFeatures, FeatureExtractor};
use uuid::Uuid;

/// Prefab the client shows when nothing was accepted
pub const UNKNOWN_PREFAB: &str = "Unknown";

/// Message when a recognized shape has no catalog entry
pub const SHAPE_INFO_NOT_FOUND: &str = "Shape info not found for the recognized shape";

/// Answer sent back to the drawing client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionResponse {
    pub success: bool,
    pub drawing_id: String,
    /// Prefab to spawn, [`UNKNOWN_PREFAB`] when not accepted
    pub prefab_name: String,
    pub error_message: String,
    /// Error log id when the failure was unexpected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
}

impl RecognitionResponse {
    fn accepted(drawing_id: &str, prefab_name: &str) -> Self {
        Self {
            success: true,
            drawing_id: drawing_id.to_string(),
            prefab_name: prefab_name.to_string(),
            error_message: String::new(),
            error_id: None,
        }
    }

    fn below_threshold(drawing_id: &str, score: u8, threshold: u8) -> Self {
        Self {
            success: true,
            drawing_id: drawing_id.to_string(),
            prefab_name: UNKNOWN_PREFAB.to_string(),
            error_message: format!(
                "Recognized but below threshold. Score: {}, Required: {}",
                score, threshold
            ),
            error_id: None,
        }
    }

    fn failed(drawing_id: &str, message: &str) -> Self {
        Self {
            success: false,
            drawing_id: drawing_id.to_string(),
            prefab_name: UNKNOWN_PREFAB.to_string(),
            error_message: message.to_string(),
            error_id: None,
        }
    }

    fn from_failure(drawing_id: &str, result: &RecognitionResult) -> Self {
        Self {
            error_id: result.error_id().map(str::to_string),
            ..Self::failed(drawing_id, result.error_message())
        }
    }
}

/// Feature extraction, recognition and acceptance for incoming drawings
pub struct DrawingService {
    extractor: FeatureExtractor,
    orchestrator: RecognitionOrchestrator,
    catalog: Arc<dyn ShapeCatalogLookup>,
    feature_sink: Arc<dyn FeatureSink>,
    locale: Locale,
}

impl DrawingService {
    pub fn new(
        extractor: FeatureExtractor,
        orchestrator: RecognitionOrchestrator,
        catalog: Arc<dyn ShapeCatalogLookup>,
        feature_sink: Arc<dyn FeatureSink>,
    ) -> Self {
        Self {
            extractor,
            orchestrator,
            catalog,
            feature_sink,
            locale: Locale::default(),
        }
    }

    /// Reply language for catalogs built by [`Self::handle_drawing`]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn extract_features(
        &self,
        drawing: &DrawingData,
    ) -> std::result::Result<DrawingFeatures, FeatureError> {
        self.extractor.extract(drawing)
    }

    /// Run recognition on already extracted features
    pub async fn process_drawing(
        &self,
        drawing: &DrawingData,
        catalog: &ShapeCatalog,
        features: &DrawingFeatures,
    ) -> RecognitionResult {
        self.orchestrator.process(drawing, catalog, features).await
    }

    /// Full request flow for one drawing
    ///
    /// Returns `None` when the client did not ask for recognition. Features
    /// are persisted concurrently with recognition; a failed feature write
    /// is logged and does not affect the response. Malformed drawings and
    /// catalog failures are logged to the error sink and answered with a
    /// failed response carrying the error id.
    pub async fn handle_drawing(&self, drawing: &DrawingData) -> Option<RecognitionResponse> {
        if !drawing.use_ai {
            tracing::debug!("Drawing {} did not request recognition", drawing.drawing_id);
            return None;
        }

        let result = match self.recognize(drawing).await {
            Ok(result) => result,
            Err(e) => self.orchestrator.report_unexpected(drawing, None, &e).await,
        };

        let response = match self.accept(drawing, &result).await {
            Ok(response) => response,
            Err(e) => {
                let failed = self
                    .orchestrator
                    .report_unexpected(drawing, Some(result.result_id()), &e)
                    .await;
                RecognitionResponse::from_failure(&drawing.drawing_id, &failed)
            }
        };
        Some(response)
    }

    async fn recognize(&self, drawing: &DrawingData) -> Result<RecognitionResult> {
        let features = self.extract_features(drawing)?;
        let record = FeatureRecord {
            feature_id: Uuid::new_v4().to_string(),
            drawing_id: drawing.drawing_id.clone(),
            total_strokes: features.global_features.total_strokes,
            total_points: features.global_features.total_points,
            features: features.to_json()?,
            created_at: Utc::now(),
        };

        let shapes = self.catalog.get_available_shapes(&drawing.scene_id).await?;
        if shapes.is_empty() {
            tracing::warn!("No shapes available for scene {}", drawing.scene_id);
        }
        let catalog = ShapeCatalog::new(shapes).with_locale(self.locale);

        let (result, saved) = tokio::join!(
            self.process_drawing(drawing, &catalog, &features),
            self.feature_sink.insert_features(record)
        );
        if let Err(e) = saved {
            tracing::error!("Failed to save features for drawing {}: {}", drawing.drawing_id, e);
        }
        Ok(result)
    }

    /// Map a recognition result to the client response
    async fn accept(
        &self,
        drawing: &DrawingData,
        result: &RecognitionResult,
    ) -> Result<RecognitionResponse> {
        let drawing_id = drawing.drawing_id.as_str();
        if !result.is_success() {
            return Ok(RecognitionResponse::from_failure(drawing_id, result));
        }

        let Some(shape) = self.catalog.get_shape_info(result.shape_id()).await? else {
            tracing::error!("Shape info not found for shape_id: {}", result.shape_id());
            return Ok(RecognitionResponse::failed(drawing_id, SHAPE_INFO_NOT_FOUND));
        };

        if result.score() >= shape.threshold {
            Ok(RecognitionResponse::accepted(drawing_id, &shape.prefab_name))
        } else {
            Ok(RecognitionResponse::below_threshold(
                drawing_id,
                result.score(),
                shape.threshold,
            ))
        }
    }
}
