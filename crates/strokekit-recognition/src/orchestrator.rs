//! Recognition orchestration
//!
//! Routes a drawing to the adapter bound to its group, records successful
//! results, and turns every unexpected error into a failed result with a
//! logged error id. Nothing escapes [`RecognitionOrchestrator::process`].

use chrono::Utc;
use std::backtrace::Backtrace;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use strokekit_core::{
    ConfigurationError, DrawingData, DrawingGroup, Error, ErrorLogRecord, ErrorSink,
    RecognitionResult, Result, ResultDetailRecord, ResultRecord, ResultSink, ShapeCatalog,
};
use strokekit_features::{classify_features, DrawingFeatures};
use strokekit_providers::ProviderAdapter;
use uuid::Uuid;

/// Selects an adapter per drawing group and records outcomes
pub struct RecognitionOrchestrator {
    adapters: BTreeMap<DrawingGroup, Arc<dyn ProviderAdapter>>,
    results: Arc<dyn ResultSink>,
    errors: Arc<dyn ErrorSink>,
}

impl RecognitionOrchestrator {
    /// Orchestrator with no bindings
    pub fn new(results: Arc<dyn ResultSink>, errors: Arc<dyn ErrorSink>) -> Self {
        Self {
            adapters: BTreeMap::new(),
            results,
            errors,
        }
    }

    /// Bind `adapter` to `group`, replacing any previous binding
    pub fn with_adapter(mut self, group: DrawingGroup, adapter: Arc<dyn ProviderAdapter>) -> Self {
        self.adapters.insert(group, adapter);
        self
    }

    pub fn adapter(&self, group: DrawingGroup) -> Option<&Arc<dyn ProviderAdapter>> {
        self.adapters.get(&group)
    }

    /// Bindings in group order
    pub fn bindings(&self) -> impl Iterator<Item = (DrawingGroup, &Arc<dyn ProviderAdapter>)> {
        self.adapters.iter().map(|(g, a)| (*g, a))
    }

    /// Classify, recognize and record one drawing
    pub async fn process(
        &self,
        drawing: &DrawingData,
        catalog: &ShapeCatalog,
        features: &DrawingFeatures,
    ) -> RecognitionResult {
        let group = classify_features(features);
        tracing::info!("Drawing {} routed to group {}", drawing.drawing_id, group);

        let Some(adapter) = self.adapters.get(&group) else {
            let err = ConfigurationError::NoAdapterForGroup {
                group: group.to_string(),
            };
            tracing::error!("{}", err);
            return RecognitionResult::failure(err.to_string());
        };

        let started = Instant::now();
        let result = adapter.recognize(drawing, catalog, features).await;
        if !result.is_success() {
            tracing::warn!(
                "Recognition failed for drawing {} ({}): {}",
                drawing.drawing_id,
                result.model_name(),
                result.error_message()
            );
            return result;
        }

        let process_time_ms = started.elapsed().as_millis() as u64;
        match self.record(drawing, &result, process_time_ms).await {
            Ok(()) => {
                tracing::info!(
                    "Drawing {} recognized as {} (score {}) by {} in {}ms",
                    drawing.drawing_id,
                    result.shape_id(),
                    result.score(),
                    result.model_name(),
                    process_time_ms
                );
                result
            }
            Err(e) => {
                self.report_unexpected(drawing, Some(result.result_id()), &e)
                    .await
            }
        }
    }

    async fn record(
        &self,
        drawing: &DrawingData,
        result: &RecognitionResult,
        process_time_ms: u64,
    ) -> Result<()> {
        let created_at = Utc::now();
        self.results
            .insert_result(ResultRecord {
                result_id: result.result_id().to_string(),
                drawing_id: drawing.drawing_id.clone(),
                shape_id: result.shape_id().to_string(),
                success: true,
                created_at,
            })
            .await?;

        self.results
            .insert_detail(ResultDetailRecord {
                result_id: result.result_id().to_string(),
                drawing_id: drawing.drawing_id.clone(),
                scene_id: drawing.scene_id.clone(),
                shape_id: result.shape_id().to_string(),
                success: true,
                score: result.score(),
                reasoning: result.reasoning().to_string(),
                process_time_ms,
                model_name: result.model_name().to_string(),
                api_response: result.api_response().to_string(),
                error_message: String::new(),
                client_id: drawing.client_id.clone(),
                created_at,
            })
            .await?;
        Ok(())
    }

    /// Log an unexpected error to the error sink and build the failed result
    pub async fn report_unexpected(
        &self,
        drawing: &DrawingData,
        result_id: Option<&str>,
        error: &Error,
    ) -> RecognitionResult {
        let error_id = Uuid::new_v4().to_string();
        tracing::error!(
            "Unexpected error {} for drawing {}: {}",
            error_id,
            drawing.drawing_id,
            error
        );

        let record = ErrorLogRecord {
            error_id: error_id.clone(),
            result_id: result_id.map(str::to_string),
            drawing_id: Some(drawing.drawing_id.clone()),
            scene_id: Some(drawing.scene_id.clone()),
            error_type: error.kind().to_string(),
            error_message: error.to_string(),
            stack_trace: Some(Backtrace::force_capture().to_string()),
            created_at: Utc::now(),
        };
        if let Err(e) = self.errors.insert_error(record).await {
            tracing::error!("Failed to write error log {}: {}", error_id, e);
        }

        RecognitionResult::failure_with_error_id(error.to_string(), error_id)
    }
}
