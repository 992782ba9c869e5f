//! Error handling for StrokeKit
//!
//! Provides the error taxonomy shared by every layer of the recognition pipeline:
//! - Configuration errors (missing group bindings, disabled adapters)
//! - Provider errors (a single vendor call failed)
//! - Parse errors (vendor reply could not be turned into a result)
//! - Feature errors (drawing geometry unusable)
//! - Sink errors (an external collaborator rejected a write)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Raised when the process wiring cannot serve a request. These are never
/// fatal: the orchestrator turns them into failed results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// No adapter is bound to the classified group
    #[error("No AI service configured for group {group}")]
    NoAdapterForGroup {
        /// The group label (A, B, BOTH).
        group: String,
    },

    /// The adapter has no API key or no models
    #[error("{provider} adapter is disabled: {reason}")]
    AdapterDisabled {
        /// The provider display name.
        provider: String,
        /// Why the adapter is disabled.
        reason: String,
    },

    /// A model identifier is not known for the provider
    #[error("Unknown model '{model}' for provider {provider}")]
    UnknownModel {
        /// The provider display name.
        provider: String,
        /// The rejected model identifier.
        model: String,
    },

    /// A setting value is invalid
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting {
        /// The setting key.
        key: String,
        /// The reason the value is invalid.
        reason: String,
    },
}

/// Provider (transport) error type
///
/// Represents the failure of one model-completion call. The adapter recovers
/// from these by moving on to the next configured model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The HTTP request could not be sent or completed
    #[error("Request to {provider} failed: {reason}")]
    Request {
        /// The provider display name.
        provider: String,
        /// The transport failure description.
        reason: String,
    },

    /// The vendor answered with a non-success status
    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        /// The provider display name.
        provider: String,
        /// The HTTP status code.
        status: u16,
        /// The response body, as returned by the vendor.
        body: String,
    },

    /// The call exceeded its configured timeout
    #[error("{provider} call timed out after {timeout_secs}s")]
    Timeout {
        /// The provider display name.
        provider: String,
        /// The timeout in seconds.
        timeout_secs: u64,
    },

    /// The vendor payload did not have the expected shape
    #[error("Malformed {provider} response: {reason}")]
    MalformedResponse {
        /// The provider display name.
        provider: String,
        /// What was missing or invalid.
        reason: String,
    },

    /// The vendor returned no text
    #[error("Empty response from {provider}")]
    EmptyResponse {
        /// The provider display name.
        provider: String,
    },
}

/// Parse error type
///
/// Represents a vendor reply that could not be converted into a recognition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The reply is not a JSON object
    #[error("Invalid JSON in response: {reason}")]
    InvalidJson {
        /// The decoder message.
        reason: String,
    },

    /// A required field is absent or has the wrong type
    #[error("Missing or invalid field '{field}' in response")]
    MissingField {
        /// The field name.
        field: String,
    },

    /// The score is not an integer in 0..=100
    #[error("Score out of range: {score}")]
    ScoreOutOfRange {
        /// The offending score as received.
        score: String,
    },

    /// The shape id is not part of the supplied catalog
    #[error("Invalid shape ID: {shape_id}")]
    InvalidShapeId {
        /// The unknown shape id.
        shape_id: String,
    },
}

/// Feature extraction error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// A stroke has no positions
    #[error("Stroke {index} has no positions")]
    EmptyStroke {
        /// The stroke index within the drawing.
        index: usize,
    },

    /// The drawing has no strokes or no points at all
    #[error("Drawing has no strokes")]
    EmptyDrawing,
}

/// Sink error type
///
/// Raised by external collaborators (persistence, catalog lookups).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{sink} failed: {reason}")]
pub struct SinkError {
    /// Which collaborator failed.
    pub sink: String,
    /// The failure description.
    pub reason: String,
}

impl SinkError {
    /// Create a sink error
    pub fn new(sink: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            sink: sink.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for StrokeKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Provider error
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Parse error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Feature error
    #[error(transparent)]
    Feature(#[from] FeatureError),

    /// Sink error
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable type name written to the error log
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Configuration(_) => "ConfigurationError",
            Error::Provider(_) => "TransportError",
            Error::Parse(_) => "ParseError",
            Error::Feature(_) => "FeatureError",
            Error::Sink(_) => "SinkError",
            Error::Json(_) => "JsonError",
        }
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Provider(ProviderError::Timeout { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::NoAdapterForGroup {
            group: "BOTH".to_string(),
        };
        assert_eq!(err.to_string(), "No AI service configured for group BOTH");
    }

    #[test]
    fn test_parse_error_names_shape_id() {
        let err = ParseError::InvalidShapeId {
            shape_id: "circle".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid shape ID: circle");
    }

    #[test]
    fn test_error_kind() {
        let err: Error = SinkError::new("result sink", "connection refused").into();
        assert_eq!(err.kind(), "SinkError");
        assert_eq!(err.to_string(), "result sink failed: connection refused");

        let err: Error = ProviderError::Timeout {
            provider: "OpenAI".to_string(),
            timeout_secs: 5,
        }
        .into();
        assert!(err.is_timeout());
        assert_eq!(err.kind(), "TransportError");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = FeatureError::EmptyDrawing.into();
        assert!(matches!(err, Error::Feature(_)));
        assert_eq!(err.kind(), "FeatureError");
    }
}
