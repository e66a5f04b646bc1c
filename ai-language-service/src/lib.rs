//! Ezriya AI language service.
//!
//! Serves the chat agent endpoint. Replies come from a [`services::ChatAgent`]
//! backend; the only backend today is the placeholder agent.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

/// Identifier reported by `/health` and `/ready`.
pub const SERVICE_NAME: &str = "ai-language";

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ezriya AI Language Service",
        description = "Conversational agent for property listings"
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::health::metrics_endpoint,
        handlers::chat::chat_agent,
    ),
    components(
        schemas(
            dtos::ChatRequest,
            dtos::ChatResponse,
            services::SuggestedAction,
            service_core::health::HealthStatus,
            service_core::health::ReadinessStatus,
            service_core::error::ErrorResponse,
        )
    ),
    tags(
        (name = "Chat", description = "Chat agent"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;
