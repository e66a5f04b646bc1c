//! Ezriya AI vision service.
//!
//! Serves property condition analysis. Results come from a
//! [`services::ConditionAnalyzer`]; the only analyzer today is the placeholder.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

/// Identifier reported by `/health` and `/ready`.
pub const SERVICE_NAME: &str = "ai-vision";

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ezriya AI Vision Service",
        description = "Property photo condition analysis"
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::health::metrics_endpoint,
        handlers::condition::analyze_condition,
    ),
    components(
        schemas(
            dtos::ConditionAnalysisRequest,
            dtos::ConditionAnalysisResult,
            services::ConditionTag,
            service_core::health::HealthStatus,
            service_core::health::ReadinessStatus,
            service_core::error::ErrorResponse,
        )
    ),
    tags(
        (name = "Vision", description = "Image condition analysis"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;
