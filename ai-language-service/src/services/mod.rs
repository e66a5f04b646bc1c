pub mod agent;

pub use agent::{AgentError, AgentReply, ChatAgent, PlaceholderAgent, SuggestedAction};
