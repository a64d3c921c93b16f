use async_trait::async_trait;
use serde_json::Value;
use soulrise_core::models::token_count::TokenCount;

use crate::error::ServiceError;
use crate::prompt::PlanPrompt;

/// What the model sent back.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyContent {
    /// Schema-constrained output, e.g. the input of a forced tool call.
    Structured(Value),
    /// Free text, returned when the model did not use structured output.
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceReply {
    pub content: ReplyContent,
    pub usage: Option<TokenCount>,
}

/// An external text-generation backend.
///
/// Implementations perform exactly one outbound call per `generate` and
/// hold no per-call state, so one instance can serve concurrent requests.
#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Send the prompt, asking for output that conforms to `schema`.
    async fn generate(
        &self,
        prompt: &PlanPrompt,
        schema: &Value,
    ) -> Result<ServiceReply, ServiceError>;
}
