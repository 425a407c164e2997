//! Brand orchestration — one completion call per operation, with extraction
//! applied only to analysis. Every outcome is a tagged `Result`.

use thiserror::Error;
use tracing::{debug, info};

use crate::brand::extract::{extract_brand_profile, ExtractionError};
use crate::brand::models::BrandProfile;
use crate::brand::prompts::{
    analyze_user_message, content_user_message, guide_user_message, ANALYZE_SYSTEM,
    ANALYZE_TEMPERATURE, CONTENT_SYSTEM, CONTENT_TEMPERATURE, GUIDE_SYSTEM, GUIDE_TEMPERATURE,
};
use crate::llm_client::{CompletionModel, LlmError};

#[derive(Debug, Error)]
pub enum BrandError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Upstream(#[from] LlmError),

    #[error("Failed to encode brand profile: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Distills free brand text into a `BrandProfile`.
pub async fn analyze_brand(
    llm: &dyn CompletionModel,
    brand_text: &str,
) -> Result<BrandProfile, BrandError> {
    let raw = llm
        .complete(
            ANALYZE_SYSTEM,
            &analyze_user_message(brand_text),
            ANALYZE_TEMPERATURE,
        )
        .await?;
    debug!("Analysis completion: {} chars", raw.len());

    let profile = extract_brand_profile(&raw)?;
    info!(
        "Brand analyzed: archetype={}, keywords={}",
        profile.archetype,
        profile.keywords.len()
    );
    Ok(profile)
}

/// Turns a profile into a Markdown voice & tone guide.
pub async fn generate_guide(
    llm: &dyn CompletionModel,
    profile: &BrandProfile,
) -> Result<String, BrandError> {
    let user = guide_user_message(profile)?;
    let guide = llm.complete(GUIDE_SYSTEM, &user, GUIDE_TEMPERATURE).await?;
    debug!("Guide generated: {} chars", guide.len());
    Ok(guide)
}

/// Writes content for `user_request` in the voice defined by `brand_guide`.
pub async fn generate_content(
    llm: &dyn CompletionModel,
    brand_guide: &str,
    user_request: &str,
) -> Result<String, BrandError> {
    let user = content_user_message(brand_guide, user_request);
    let content = llm
        .complete(CONTENT_SYSTEM, &user, CONTENT_TEMPERATURE)
        .await?;
    debug!("Content generated: {} chars", content.len());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::{FailingCompletion, FixedCompletion};

    const ANALYSIS_REPLY: &str = r#"Here you go:
{"BrandArchetype": "Explorer", "ToneAndVoice": ["bold", "warm", "curious"], "CoreValues": ["freedom"], "TargetAudience": "Hikers", "Keywords": ["trail", "gear"]}"#;

    #[tokio::test]
    async fn test_analyze_brand_sends_analysis_prompt_at_temperature_zero() {
        let llm = FixedCompletion::new(ANALYSIS_REPLY);
        let profile = analyze_brand(&llm, "We make boots for long trails.")
            .await
            .unwrap();

        assert_eq!(profile.archetype, "Explorer");
        assert_eq!(profile.tone_and_voice.len(), 3);

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, ANALYZE_SYSTEM);
        assert_eq!(
            calls[0].user,
            "Here is the brand text: We make boots for long trails."
        );
        assert_eq!(calls[0].temperature, 0.0);
    }

    #[tokio::test]
    async fn test_analyze_brand_is_idempotent_against_fixed_upstream() {
        let llm = FixedCompletion::new(ANALYSIS_REPLY);
        let first = analyze_brand(&llm, "same text").await.unwrap();
        let second = analyze_brand(&llm, "same text").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_analyze_brand_without_json_is_extraction_error() {
        let llm = FixedCompletion::new("I'm sorry, I can't help with that.");
        let result = analyze_brand(&llm, "text").await;
        assert!(matches!(
            result,
            Err(BrandError::Extraction(ExtractionError::NoJsonFound))
        ));
    }

    #[tokio::test]
    async fn test_analyze_brand_propagates_upstream_error() {
        let llm = FailingCompletion {
            status: 429,
            message: "Rate limit reached".to_string(),
        };
        let result = analyze_brand(&llm, "text").await;
        assert!(matches!(
            result,
            Err(BrandError::Upstream(LlmError::Api { status: 429, .. }))
        ));
    }

    #[tokio::test]
    async fn test_generate_guide_sends_profile_json() {
        let llm = FixedCompletion::new("\n### Brand Personality\n- **Our Archetype**: Sage\n");
        let profile = BrandProfile {
            archetype: "Sage".to_string(),
            ..BrandProfile::default()
        };

        let guide = generate_guide(&llm, &profile).await.unwrap();
        assert_eq!(guide, "### Brand Personality\n- **Our Archetype**: Sage");

        let calls = llm.calls();
        assert_eq!(calls[0].system, GUIDE_SYSTEM);
        assert!(calls[0].user.contains(r#""BrandArchetype":"Sage""#));
        assert_eq!(calls[0].temperature, 0.5);
    }

    #[tokio::test]
    async fn test_generate_content_wraps_guide_and_request() {
        let llm = FixedCompletion::new("  Lace up. The trail is calling.  ");
        let content = generate_content(&llm, "# Guide", "Write a tagline")
            .await
            .unwrap();
        assert_eq!(content, "Lace up. The trail is calling.");

        let calls = llm.calls();
        assert_eq!(calls[0].system, CONTENT_SYSTEM);
        assert!(calls[0].user.contains("<brand_guide>\n# Guide\n</brand_guide>"));
        assert!(calls[0].user.contains("<request>\nWrite a tagline\n</request>"));
        assert_eq!(calls[0].temperature, 0.7);
    }
}
