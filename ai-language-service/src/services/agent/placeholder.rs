use super::{AgentError, AgentReply, ChatAgent, SuggestedAction};
use async_trait::async_trait;
use serde_json::{Map, Value};

pub const PLACEHOLDER_RESPONSE: &str = "This is a placeholder response from the AI Agent.";

/// Agent that ignores its input and returns a fixed reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAgent;

impl PlaceholderAgent {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatAgent for PlaceholderAgent {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    async fn respond(
        &self,
        _message: &str,
        _context: &Map<String, Value>,
    ) -> Result<AgentReply, AgentError> {
        Ok(AgentReply {
            response: PLACEHOLDER_RESPONSE.to_string(),
            suggested_actions: vec![
                SuggestedAction::ScheduleViewing,
                SuggestedAction::SendContract,
            ],
        })
    }

    async fn health_check(&self) -> Result<(), AgentError> {
        Ok(())
    }
}
