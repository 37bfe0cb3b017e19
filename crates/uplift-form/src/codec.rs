use serde_json::Value;
use thiserror::Error;

use crate::answers::AnswerSet;

/// Failure while converting between an answer set and its persisted form.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed answer payload: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to encode answers: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Parse a persisted or submitted JSON object into an answer set.
pub fn decode_strict(raw: &str) -> Result<AnswerSet, CodecError> {
    serde_json::from_str(raw).map_err(CodecError::Parse)
}

/// Soft decode used on the storage read path: a corrupted stored value
/// degrades to an empty answer set so it never blocks page rendering.
pub fn decode(raw: &str) -> AnswerSet {
    decode_strict(raw).unwrap_or_default()
}

/// Soft decode of an already-structured payload. The host may hand over a
/// parsed JSON object or a string still carrying the encoded form; anything
/// else decodes as empty.
pub fn decode_value(payload: &Value) -> AnswerSet {
    match payload {
        Value::Object(_) => {
            serde_json::from_value(payload.clone()).unwrap_or_default()
        }
        Value::String(raw) => decode(raw),
        _ => AnswerSet::new(),
    }
}

/// Canonical persisted form: a JSON object keyed by question text, preserving
/// the answer set's own iteration order.
pub fn encode(answers: &AnswerSet) -> Result<String, CodecError> {
    serde_json::to_string(answers).map_err(CodecError::Encode)
}
