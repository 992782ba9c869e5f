//! External collaborator interfaces
//!
//! Persistence and the shape catalog live outside the recognition core. The
//! server layer supplies implementations of these traits; the core only
//! calls them.

use crate::data::{ShapeInfo, ShapeSummary};
use crate::error::SinkError;
use crate::result::{ErrorLogRecord, FeatureRecord, ResultDetailRecord, ResultRecord};
use async_trait::async_trait;

/// Result type for collaborator calls
pub type SinkResult<T> = std::result::Result<T, SinkError>;

/// Read access to the shape catalog
#[async_trait]
pub trait ShapeCatalogLookup: Send + Sync {
    /// Shapes that may be drawn in the given scene, in catalog order
    async fn get_available_shapes(&self, scene_id: &str) -> SinkResult<Vec<ShapeInfo>>;

    /// Acceptance data for one shape
    async fn get_shape_info(&self, shape_id: &str) -> SinkResult<Option<ShapeSummary>>;
}

/// Destination for successful recognitions
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn insert_result(&self, record: ResultRecord) -> SinkResult<()>;

    async fn insert_detail(&self, record: ResultDetailRecord) -> SinkResult<()>;
}

/// Destination for unexpected failures
#[async_trait]
pub trait ErrorSink: Send + Sync {
    async fn insert_error(&self, record: ErrorLogRecord) -> SinkResult<()>;
}

/// Destination for extracted features
#[async_trait]
pub trait FeatureSink: Send + Sync {
    async fn insert_features(&self, record: FeatureRecord) -> SinkResult<()>;
}
