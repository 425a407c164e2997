//! Response Extractor — pulls a JSON object out of free-text model output and
//! binds it onto a `BrandProfile`.
//!
//! Decoding is two-phase:
//! 1. `extract_json` locates the span from the first `{` to the last `}` and
//!    parses it into a loose `serde_json::Value`. When no `}` follows the
//!    first `{`, a single `}` is appended. There is no bracket-depth
//!    awareness and no further repair.
//! 2. `bind_profile` builds the profile field by field, substituting defaults
//!    for missing or `null` keys and rejecting values of the wrong type.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::brand::models::{
    BrandProfile, KEY_ARCHETYPE, KEY_CORE_VALUES, KEY_KEYWORDS, KEY_TARGET_AUDIENCE,
    KEY_TONE_AND_VOICE, NOT_AVAILABLE,
};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No valid JSON object found in the model's response")]
    NoJsonFound,

    #[error("Extracted text is not a valid JSON object: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Field '{field}' has the wrong type: expected {expected}")]
    SchemaMismatch {
        field: &'static str,
        expected: &'static str,
    },
}

/// Locates and parses the JSON object embedded in `raw`.
pub fn extract_json(raw: &str) -> Result<Value, ExtractionError> {
    let start = raw.find('{').ok_or(ExtractionError::NoJsonFound)?;

    let candidate = match raw.rfind('}') {
        Some(end) if end > start => raw[start..=end].to_string(),
        _ => format!("{}}}", &raw[start..]),
    };

    serde_json::from_str(&candidate).map_err(ExtractionError::InvalidJson)
}

/// Binds a parsed value onto the profile shape. Unknown keys are ignored.
pub fn bind_profile(value: &Value) -> Result<BrandProfile, ExtractionError> {
    let object = value.as_object().ok_or(ExtractionError::SchemaMismatch {
        field: "<root>",
        expected: "object",
    })?;

    Ok(BrandProfile {
        archetype: scalar_field(object, KEY_ARCHETYPE)?,
        tone_and_voice: list_field(object, KEY_TONE_AND_VOICE)?,
        core_values: list_field(object, KEY_CORE_VALUES)?,
        target_audience: scalar_field(object, KEY_TARGET_AUDIENCE)?,
        keywords: list_field(object, KEY_KEYWORDS)?,
    })
}

/// Full extraction: raw model text in, validated profile out.
pub fn extract_brand_profile(raw: &str) -> Result<BrandProfile, ExtractionError> {
    bind_profile(&extract_json(raw)?)
}

fn scalar_field(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ExtractionError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(NOT_AVAILABLE.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ExtractionError::SchemaMismatch {
            field,
            expected: "string",
        }),
    }
}

fn list_field(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, ExtractionError> {
    let mismatch = ExtractionError::SchemaMismatch {
        field,
        expected: "list of strings",
    };
    match object.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(String::from))
            .collect::<Option<Vec<_>>>()
            .ok_or(mismatch),
        Some(_) => Err(mismatch),
    }
}
