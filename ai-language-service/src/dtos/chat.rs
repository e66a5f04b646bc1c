use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::services::{AgentReply, SuggestedAction};

/// Body of `POST /chat/agent`.
///
/// Both fields are required. `context` must be a JSON object; its values are
/// free-form.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[schema(example = "Is the loft on Main Street still available?")]
    pub message: String,
    #[schema(value_type = Object, example = json!({"listing_id": "L-42"}))]
    pub context: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    #[schema(example = "This is a placeholder response from the AI Agent.")]
    pub response: String,
    pub suggested_actions: Vec<SuggestedAction>,
}

impl From<AgentReply> for ChatResponse {
    fn from(reply: AgentReply) -> Self {
        Self {
            response: reply.response,
            suggested_actions: reply.suggested_actions,
        }
    }
}
