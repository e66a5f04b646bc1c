pub mod condition;
pub mod health;

pub use condition::analyze_condition;
pub use health::{health_check, metrics_endpoint, readiness_check};
