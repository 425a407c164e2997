//! Axum route handlers for the Brand API.

use axum::{extract::State, Json};

use crate::brand::models::{
    AnalyzeBrandRequest, BrandProfile, GenerateContentRequest, GenerateContentResponse,
    GuideResponse,
};
use crate::brand::service::{analyze_brand, generate_content, generate_guide};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analyze-brand
///
/// Analyzes free brand text and returns the structured brand profile.
pub async fn handle_analyze_brand(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeBrandRequest>,
) -> Result<Json<BrandProfile>, AppError> {
    if request.brand_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Brand text cannot be empty.".to_string(),
        ));
    }

    let profile = analyze_brand(state.llm.as_ref(), &request.brand_text)
        .await
        .map_err(|e| AppError::during("analysis", e))?;

    Ok(Json(profile))
}

/// POST /api/v1/generate-guide
///
/// Generates a Markdown voice & tone guide from a brand profile.
pub async fn handle_generate_guide(
    State(state): State<AppState>,
    Json(profile): Json<BrandProfile>,
) -> Result<Json<GuideResponse>, AppError> {
    let guide_markdown = generate_guide(state.llm.as_ref(), &profile)
        .await
        .map_err(|e| AppError::during("guide generation", e))?;

    Ok(Json(GuideResponse { guide_markdown }))
}

/// POST /api/v1/generate-content
///
/// Generates on-brand content for a request, following the supplied guide.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    Json(request): Json<GenerateContentRequest>,
) -> Result<Json<GenerateContentResponse>, AppError> {
    if request.brand_guide.trim().is_empty() || request.user_request.trim().is_empty() {
        return Err(AppError::Validation(
            "Brand guide and user request cannot be empty.".to_string(),
        ));
    }

    let generated_content = generate_content(
        state.llm.as_ref(),
        &request.brand_guide,
        &request.user_request,
    )
    .await
    .map_err(|e| AppError::during("content generation", e))?;

    Ok(Json(GenerateContentResponse { generated_content }))
}
