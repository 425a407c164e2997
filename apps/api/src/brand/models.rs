//! Brand payloads — the profile produced by analysis and the request/response
//! bodies of the three brand endpoints. Nothing here is persisted.

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder for scalar profile fields the model did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

// Wire keys of the profile object, shared by serde and the extractor.
pub const KEY_ARCHETYPE: &str = "BrandArchetype";
pub const KEY_TONE_AND_VOICE: &str = "ToneAndVoice";
pub const KEY_CORE_VALUES: &str = "CoreValues";
pub const KEY_TARGET_AUDIENCE: &str = "TargetAudience";
pub const KEY_KEYWORDS: &str = "Keywords";

/// Structured brand-voice attributes distilled from free text.
///
/// Missing or `null` fields take their defaults on the way in: scalars become
/// `"N/A"`, lists become empty. No field is ever null on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandProfile {
    #[serde(rename = "BrandArchetype", deserialize_with = "string_or_na")]
    pub archetype: String,
    #[serde(rename = "ToneAndVoice", deserialize_with = "list_or_empty")]
    pub tone_and_voice: Vec<String>,
    #[serde(rename = "CoreValues", deserialize_with = "list_or_empty")]
    pub core_values: Vec<String>,
    #[serde(rename = "TargetAudience", deserialize_with = "string_or_na")]
    pub target_audience: String,
    #[serde(rename = "Keywords", deserialize_with = "list_or_empty")]
    pub keywords: Vec<String>,
}

impl Default for BrandProfile {
    fn default() -> Self {
        Self {
            archetype: NOT_AVAILABLE.to_string(),
            tone_and_voice: Vec::new(),
            core_values: Vec::new(),
            target_audience: NOT_AVAILABLE.to_string(),
            keywords: Vec::new(),
        }
    }
}

fn string_or_na<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| NOT_AVAILABLE.to_string()))
}

fn list_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeBrandRequest {
    pub brand_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GuideResponse {
    pub guide_markdown: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentRequest {
    pub brand_guide: String,
    pub user_request: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    pub generated_content: String,
}
