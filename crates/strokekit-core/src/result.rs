//! Canonical recognition results and the records written to sinks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Provider-agnostic outcome of one recognition attempt
///
/// Every adapter and the orchestrator return this shape, whatever the vendor
/// or failure mode. Fields are private so a result cannot be altered once
/// constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    success: bool,
    result_id: String,
    shape_id: String,
    score: u8,
    reasoning: String,
    model_name: String,
    api_response: String,
    error_message: String,
    error_id: Option<String>,
}

impl RecognitionResult {
    /// Successful recognition
    pub fn success(
        result_id: impl Into<String>,
        shape_id: impl Into<String>,
        score: u8,
        reasoning: impl Into<String>,
        model_name: impl Into<String>,
        api_response: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            result_id: result_id.into(),
            shape_id: shape_id.into(),
            score,
            reasoning: reasoning.into(),
            model_name: model_name.into(),
            api_response: api_response.into(),
            error_message: String::new(),
            error_id: None,
        }
    }

    /// Failed recognition with a fresh result id
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result_id: Uuid::new_v4().to_string(),
            shape_id: String::new(),
            score: 0,
            reasoning: String::new(),
            model_name: String::new(),
            api_response: String::new(),
            error_message: message.into(),
            error_id: None,
        }
    }

    /// Failed recognition correlated with an error log entry
    ///
    /// The error id doubles as the result id so the client and the logs
    /// carry the same identifier.
    pub fn failure_with_error_id(message: impl Into<String>, error_id: impl Into<String>) -> Self {
        let error_id = error_id.into();
        Self {
            result_id: error_id.clone(),
            error_id: Some(error_id),
            ..Self::failure(message)
        }
    }

    /// Attach the model and raw response that led to a failure
    pub fn with_model(mut self, model_name: impl Into<String>, api_response: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self.api_response = api_response.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn result_id(&self) -> &str {
        &self.result_id
    }

    pub fn shape_id(&self) -> &str {
        &self.shape_id
    }

    /// Confidence in 0..=100
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Raw vendor reply text
    pub fn api_response(&self) -> &str {
        &self.api_response
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Identifier of the error log entry, for unexpected failures
    pub fn error_id(&self) -> Option<&str> {
        self.error_id.as_deref()
    }
}

/// Row written to the result sink for each successful recognition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub result_id: String,
    pub drawing_id: String,
    pub shape_id: String,
    pub success: bool,
    pub created_at: DateTime<Utc>,
}

/// Detail row written alongside a [`ResultRecord`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDetailRecord {
    pub result_id: String,
    pub drawing_id: String,
    pub scene_id: String,
    pub shape_id: String,
    pub success: bool,
    pub score: u8,
    pub reasoning: String,
    /// Prompt build start to completion, whole milliseconds
    pub process_time_ms: u64,
    pub model_name: String,
    pub api_response: String,
    pub error_message: String,
    pub client_id: String,
    pub created_at: DateTime<Utc>,
}

/// Error log entry for unexpected failures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorLogRecord {
    pub error_id: String,
    pub result_id: Option<String>,
    pub drawing_id: Option<String>,
    pub scene_id: Option<String>,
    pub error_type: String,
    pub error_message: String,
    pub stack_trace: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Extracted features persisted for offline analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub feature_id: String,
    pub drawing_id: String,
    pub total_strokes: usize,
    pub total_points: usize,
    /// Full feature set as JSON
    pub features: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result() {
        let r = RecognitionResult::success("r1", "triangle", 85, "三角形です", "OpenAI_gpt-4o-mini", "{}");
        assert!(r.is_success());
        assert_eq!(r.result_id(), "r1");
        assert_eq!(r.score(), 85);
        assert!(r.error_message().is_empty());
        assert!(r.error_id().is_none());
    }

    #[test]
    fn test_failure_with_error_id_shares_id() {
        let r = RecognitionResult::failure_with_error_id("boom", "e-42");
        assert!(!r.is_success());
        assert_eq!(r.result_id(), "e-42");
        assert_eq!(r.error_id(), Some("e-42"));
        assert_eq!(r.error_message(), "boom");
    }

    #[test]
    fn test_failures_get_fresh_ids() {
        let a = RecognitionResult::failure("x");
        let b = RecognitionResult::failure("x");
        assert_ne!(a.result_id(), b.result_id());
    }
}
