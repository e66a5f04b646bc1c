//! Property condition analysis backends.

pub mod placeholder;

pub use placeholder::PlaceholderAnalyzer;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use thiserror::Error;
use utoipa::ToSchema;

/// Error type for analyzer operations.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Analyzer not configured: {0}")]
    NotConfigured(String),

    #[error("Analyzer backend error: {0}")]
    Backend(String),
}

impl From<AnalyzerError> for AppError {
    fn from(err: AnalyzerError) -> Self {
        match err {
            AnalyzerError::NotConfigured(_) => AppError::ServiceUnavailable,
            AnalyzerError::Backend(msg) => AppError::InternalError(anyhow::anyhow!(msg)),
        }
    }
}

/// Visual descriptors attached to an assessed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionTag {
    Modern,
    WellLit,
    Clean,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionAssessment {
    /// Overall condition. Range is not enforced.
    pub condition_score: f64,
    pub tags: Vec<ConditionTag>,
    /// Whole currency units.
    pub estimated_renovation_cost: u64,
}

#[async_trait]
pub trait ConditionAnalyzer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn analyze(&self, image_url: &str) -> Result<ConditionAssessment, AnalyzerError>;

    async fn health_check(&self) -> Result<(), AnalyzerError>;
}
