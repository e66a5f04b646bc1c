//! Chat agent abstraction.
//!
//! Handlers talk to a [`ChatAgent`] so the reasoning backend can be swapped
//! without touching the HTTP layer. [`PlaceholderAgent`] is the only
//! implementation and answers every message the same way.

pub mod placeholder;

pub use placeholder::PlaceholderAgent;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use service_core::error::AppError;
use thiserror::Error;
use utoipa::ToSchema;

/// Error type for agent operations.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Agent not configured: {0}")]
    NotConfigured(String),

    #[error("Agent backend error: {0}")]
    Backend(String),
}

impl From<AgentError> for AppError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::NotConfigured(_) => AppError::ServiceUnavailable,
            AgentError::Backend(msg) => AppError::InternalError(anyhow::anyhow!(msg)),
        }
    }
}

/// Follow-up actions the client may offer after a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    ScheduleViewing,
    SendContract,
}

/// What an agent produced for one message.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReply {
    pub response: String,
    pub suggested_actions: Vec<SuggestedAction>,
}

#[async_trait]
pub trait ChatAgent: Send + Sync {
    /// Short backend name for logs and readiness output.
    fn name(&self) -> &'static str;

    /// Answer a user message given the caller-supplied context.
    async fn respond(
        &self,
        message: &str,
        context: &Map<String, Value>,
    ) -> Result<AgentReply, AgentError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), AgentError>;
}
