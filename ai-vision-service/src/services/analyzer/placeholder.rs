use super::{AnalyzerError, ConditionAnalyzer, ConditionAssessment, ConditionTag};
use async_trait::async_trait;

pub const PLACEHOLDER_SCORE: f64 = 0.85;

/// Analyzer that never looks at the image and reports a fixed assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalyzer;

impl PlaceholderAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConditionAnalyzer for PlaceholderAnalyzer {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    async fn analyze(&self, _image_url: &str) -> Result<ConditionAssessment, AnalyzerError> {
        Ok(ConditionAssessment {
            condition_score: PLACEHOLDER_SCORE,
            tags: vec![ConditionTag::Modern, ConditionTag::WellLit, ConditionTag::Clean],
            estimated_renovation_cost: 0,
        })
    }

    async fn health_check(&self) -> Result<(), AnalyzerError> {
        Ok(())
    }
}
