use axum::{extract::State, Json};
use service_core::error::{AppError, ErrorResponse};
use service_core::extract::ValidatedJson;

use crate::dtos::{ChatRequest, ChatResponse};
use crate::startup::AppState;

/// Answer a chat message through the configured agent
#[utoipa::path(
    post,
    path = "/chat/agent",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Agent reply", body = ChatResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 503, description = "Agent backend unavailable", body = ErrorResponse)
    ),
    tag = "Chat"
)]
#[tracing::instrument(skip_all)]
pub async fn chat_agent(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    tracing::debug!(
        backend = state.agent.name(),
        message_len = request.message.len(),
        context_keys = request.context.len(),
        "Handling chat agent request"
    );

    let reply = state
        .agent
        .respond(&request.message, &request.context)
        .await?;

    Ok(Json(reply.into()))
}
