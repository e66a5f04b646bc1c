use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::{ConditionAssessment, ConditionTag};

/// Body of `POST /analyze/condition`. The URL is neither parsed nor fetched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ConditionAnalysisRequest {
    #[schema(example = "https://cdn.example.com/listings/42/kitchen.jpg")]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConditionAnalysisResult {
    #[schema(example = 0.85)]
    pub condition_score: f64,
    pub tags: Vec<ConditionTag>,
    #[schema(example = 0)]
    pub estimated_renovation_cost: u64,
}

impl From<ConditionAssessment> for ConditionAnalysisResult {
    fn from(assessment: ConditionAssessment) -> Self {
        Self {
            condition_score: assessment.condition_score,
            tags: assessment.tags,
            estimated_renovation_cost: assessment.estimated_renovation_cost,
        }
    }
}
