//! Vendor reply parsing
//!
//! Replies must contain one JSON object with `shape_id`, `score` and
//! `reason`. A fenced code block around the object is tolerated.

use serde_json::Value;
use strokekit_core::{ParseError, ShapeCatalog};

/// A reply that passed validation against the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    pub shape_id: String,
    /// Confidence in 0..=100
    pub score: u8,
    pub reason: String,
}

/// Remove a surrounding Markdown code fence, if any
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    if let Some((_, rest)) = text.split_once("```json") {
        return rest.split("```").next().unwrap_or(rest).trim();
    }
    if let Some(rest) = text.strip_prefix("```") {
        return rest.split("```").next().unwrap_or(rest).trim();
    }
    text
}

/// Parse a raw reply and validate the shape id against `catalog`
pub fn parse_response(text: &str, catalog: &ShapeCatalog) -> Result<ParsedResponse, ParseError> {
    let json_text = strip_code_fence(text);
    let value: Value = serde_json::from_str(json_text).map_err(|e| ParseError::InvalidJson {
        reason: e.to_string(),
    })?;

    let shape_id = value
        .get("shape_id")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("shape_id"))?;
    if !catalog.contains(shape_id) {
        return Err(ParseError::InvalidShapeId {
            shape_id: shape_id.to_string(),
        });
    }

    let score = parse_score(value.get("score").ok_or_else(|| missing("score"))?)?;

    let reason = value
        .get("reason")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("reason"))?;

    Ok(ParsedResponse {
        shape_id: shape_id.to_string(),
        score,
        reason: reason.to_string(),
    })
}

fn missing(field: &str) -> ParseError {
    ParseError::MissingField {
        field: field.to_string(),
    }
}

/// Integers and integral floats in 0..=100; numeric strings are accepted
fn parse_score(value: &Value) -> Result<u8, ParseError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| missing("score"))?;

    if number.fract() != 0.0 || !(0.0..=100.0).contains(&number) {
        return Err(ParseError::ScoreOutOfRange {
            score: value.to_string(),
        });
    }
    Ok(number as u8)
}
