pub mod condition;

pub use condition::{ConditionAnalysisRequest, ConditionAnalysisResult};
