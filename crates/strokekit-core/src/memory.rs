//! In-memory collaborators
//!
//! Append-only stores and a static catalog, used by the command-line runner
//! and by tests that need to observe what the pipeline wrote.

use crate::data::{ShapeInfo, ShapeSummary};
use crate::error::SinkError;
use crate::result::{ErrorLogRecord, FeatureRecord, ResultDetailRecord, ResultRecord};
use crate::sinks::{ErrorSink, FeatureSink, ResultSink, ShapeCatalogLookup, SinkResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Append-only store implementing every sink
#[derive(Debug, Default)]
pub struct MemoryStore {
    results: Mutex<Vec<ResultRecord>>,
    details: Mutex<Vec<ResultDetailRecord>>,
    errors: Mutex<Vec<ErrorLogRecord>>,
    features: Mutex<Vec<FeatureRecord>>,
    /// When set, result and feature writes fail with this reason
    failure: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent result and feature writes fail
    ///
    /// The error sink keeps accepting writes so failures stay observable.
    pub fn fail_writes(&self, reason: impl Into<String>) {
        *self.failure.lock() = Some(reason.into());
    }

    pub fn results(&self) -> Vec<ResultRecord> {
        self.results.lock().clone()
    }

    pub fn details(&self) -> Vec<ResultDetailRecord> {
        self.details.lock().clone()
    }

    pub fn errors(&self) -> Vec<ErrorLogRecord> {
        self.errors.lock().clone()
    }

    pub fn features(&self) -> Vec<FeatureRecord> {
        self.features.lock().clone()
    }

    fn check(&self, sink: &str) -> SinkResult<()> {
        match self.failure.lock().as_ref() {
            Some(reason) => Err(SinkError::new(sink, reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ResultSink for MemoryStore {
    async fn insert_result(&self, record: ResultRecord) -> SinkResult<()> {
        self.check("result sink")?;
        self.results.lock().push(record);
        Ok(())
    }

    async fn insert_detail(&self, record: ResultDetailRecord) -> SinkResult<()> {
        self.check("result detail sink")?;
        self.details.lock().push(record);
        Ok(())
    }
}

#[async_trait]
impl ErrorSink for MemoryStore {
    async fn insert_error(&self, record: ErrorLogRecord) -> SinkResult<()> {
        self.errors.lock().push(record);
        Ok(())
    }
}

#[async_trait]
impl FeatureSink for MemoryStore {
    async fn insert_features(&self, record: FeatureRecord) -> SinkResult<()> {
        self.check("feature sink")?;
        self.features.lock().push(record);
        Ok(())
    }
}

/// Fixed shape catalog
///
/// With no scene table every scene sees every shape. Once scenes are listed,
/// an unlisted scene has no shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticShapeCatalog {
    pub shapes: Vec<ShapeInfo>,
    /// Scene id to the shape ids drawable in it, in prompt order
    #[serde(default)]
    pub scenes: HashMap<String, Vec<String>>,
}

impl StaticShapeCatalog {
    pub fn new(shapes: Vec<ShapeInfo>) -> Self {
        Self {
            shapes,
            scenes: HashMap::new(),
        }
    }

    /// Restrict a scene to the listed shape ids
    pub fn with_scene(mut self, scene_id: impl Into<String>, shape_ids: Vec<String>) -> Self {
        self.scenes.insert(scene_id.into(), shape_ids);
        self
    }

    fn shape(&self, shape_id: &str) -> Option<&ShapeInfo> {
        self.shapes.iter().find(|s| s.shape_id == shape_id)
    }
}

#[async_trait]
impl ShapeCatalogLookup for StaticShapeCatalog {
    async fn get_available_shapes(&self, scene_id: &str) -> SinkResult<Vec<ShapeInfo>> {
        if self.scenes.is_empty() {
            return Ok(self.shapes.clone());
        }
        let Some(ids) = self.scenes.get(scene_id) else {
            return Ok(Vec::new());
        };
        Ok(ids.iter().filter_map(|id| self.shape(id).cloned()).collect())
    }

    async fn get_shape_info(&self, shape_id: &str) -> SinkResult<Option<ShapeSummary>> {
        Ok(self.shape(shape_id).map(ShapeInfo::summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::NegativeExamples;
    use chrono::Utc;

    fn shape(id: &str) -> ShapeInfo {
        ShapeInfo {
            shape_id: id.to_string(),
            prefab_name: id.to_uppercase(),
            threshold: 60,
            name_ja: id.to_string(),
            name_en: id.to_string(),
            description_ja: String::new(),
            description_en: String::new(),
            negative_examples: NegativeExamples::default(),
        }
    }

    #[tokio::test]
    async fn test_catalog_scene_filtering() {
        let catalog = StaticShapeCatalog::new(vec![shape("star"), shape("heart")])
            .with_scene("s1", vec!["heart".to_string(), "missing".to_string()]);

        let shapes = catalog.get_available_shapes("s1").await.unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].shape_id, "heart");
        assert!(catalog.get_available_shapes("other").await.unwrap().is_empty());

        let summary = catalog.get_shape_info("star").await.unwrap().unwrap();
        assert_eq!(summary.prefab_name, "STAR");
        assert_eq!(summary.threshold, 60);
        assert!(catalog.get_shape_info("circle").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_catalog_without_scenes_serves_everything() {
        let catalog = StaticShapeCatalog::new(vec![shape("star"), shape("heart")]);
        assert_eq!(catalog.get_available_shapes("any").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_injection() {
        let store = MemoryStore::new();
        store.fail_writes("disk full");
        let err = store
            .insert_result(ResultRecord {
                result_id: "r".to_string(),
                drawing_id: "d".to_string(),
                shape_id: "star".to_string(),
                success: true,
                created_at: Utc::now(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "result sink failed: disk full");
        assert!(store.results().is_empty());

        store
            .insert_error(ErrorLogRecord {
                error_id: "e".to_string(),
                result_id: None,
                drawing_id: None,
                scene_id: None,
                error_type: "SinkError".to_string(),
                error_message: "disk full".to_string(),
                stack_trace: None,
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        assert_eq!(store.errors().len(), 1);
    }
}
