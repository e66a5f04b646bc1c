//! Probe payloads shared by every service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn ok(service: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
        }
    }
}

/// Body of `GET /ready`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReadinessStatus {
    #[schema(example = "ready")]
    pub status: String,
    pub service: String,
    pub backend: String,
}

impl ReadinessStatus {
    pub fn ready(service: &str, backend: &str) -> Self {
        Self::with_status("ready", service, backend)
    }

    pub fn unavailable(service: &str, backend: &str) -> Self {
        Self::with_status("unavailable", service, backend)
    }

    fn with_status(status: &str, service: &str, backend: &str) -> Self {
        Self {
            status: status.to_string(),
            service: service.to_string(),
            backend: backend.to_string(),
        }
    }
}
