use axum::{extract::State, Json};
use service_core::error::{AppError, ErrorResponse};
use service_core::extract::ValidatedJson;

use crate::dtos::{ConditionAnalysisRequest, ConditionAnalysisResult};
use crate::startup::AppState;

/// Assess the condition of a property photo
#[utoipa::path(
    post,
    path = "/analyze/condition",
    request_body = ConditionAnalysisRequest,
    responses(
        (status = 200, description = "Condition assessment", body = ConditionAnalysisResult),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 503, description = "Analyzer unavailable", body = ErrorResponse)
    ),
    tag = "Vision"
)]
#[tracing::instrument(skip_all)]
pub async fn analyze_condition(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ConditionAnalysisRequest>,
) -> Result<Json<ConditionAnalysisResult>, AppError> {
    tracing::debug!(
        analyzer = state.analyzer.name(),
        image_url_len = request.image_url.len(),
        "Handling condition analysis request"
    );

    let assessment = state.analyzer.analyze(&request.image_url).await?;

    Ok(Json(assessment.into()))
}
