pub mod chat;
pub mod health;

pub use chat::chat_agent;
pub use health::{health_check, metrics_endpoint, readiness_check};
