pub mod analyzer;

pub use analyzer::{
    AnalyzerError, ConditionAnalyzer, ConditionAssessment, ConditionTag, PlaceholderAnalyzer,
};
