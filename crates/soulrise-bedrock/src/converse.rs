//! Bedrock Converse implementation of [`TextGenerationService`].
//!
//! Structured output is obtained by offering the model a single tool whose
//! input schema is the plan schema and forcing it to call that tool. The
//! tool-use input then *is* the plan. If the model answers in text instead,
//! the text is passed through for strict parsing.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SpecificToolChoice,
    SystemContentBlock, Tool, ToolChoice, ToolConfiguration, ToolInputSchema, ToolSpecification,
};
use serde_json::Value;
use tracing::info;

use crate::config::BedrockConfig;
use crate::document;
use crate::error::ServiceError;
use crate::prompt::PlanPrompt;
use crate::schema::{PLAN_TOOL_DESCRIPTION, PLAN_TOOL_NAME};
use crate::service::{ReplyContent, ServiceReply, TextGenerationService};
use crate::tokens;

pub struct BedrockPlanService {
    client: Client,
    config: BedrockConfig,
}

impl BedrockPlanService {
    pub fn new(client: Client, config: BedrockConfig) -> Self {
        Self { client, config }
    }
}

/// Offer the plan tool and force the model to call it.
fn plan_tool_config(schema: &Value) -> Result<ToolConfiguration, ServiceError> {
    let spec = ToolSpecification::builder()
        .name(PLAN_TOOL_NAME)
        .description(PLAN_TOOL_DESCRIPTION)
        .input_schema(ToolInputSchema::Json(document::from_json(schema)))
        .build()
        .map_err(|e| ServiceError::Invocation(e.to_string()))?;

    let choice = SpecificToolChoice::builder()
        .name(PLAN_TOOL_NAME)
        .build()
        .map_err(|e| ServiceError::Invocation(e.to_string()))?;

    ToolConfiguration::builder()
        .tools(Tool::ToolSpec(spec))
        .tool_choice(ToolChoice::Tool(choice))
        .build()
        .map_err(|e| ServiceError::Invocation(e.to_string()))
}

/// Pick the plan out of the response blocks: the plan tool's input if the
/// model called it, otherwise the concatenated text.
fn reply_content(blocks: &[ContentBlock]) -> ReplyContent {
    let tool_input = blocks.iter().find_map(|block| match block {
        ContentBlock::ToolUse(tool_use) if tool_use.name() == PLAN_TOOL_NAME => {
            Some(document::to_json(tool_use.input()))
        }
        _ => None,
    });

    if let Some(input) = tool_input {
        return ReplyContent::Structured(input);
    }

    let text = blocks
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    ReplyContent::Text(text)
}

#[async_trait]
impl TextGenerationService for BedrockPlanService {
    async fn generate(
        &self,
        prompt: &PlanPrompt,
        schema: &Value,
    ) -> Result<ServiceReply, ServiceError> {
        let model_id = self.config.model_id.as_str();

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.user.clone()))
            .build()
            .map_err(|e| ServiceError::Invocation(e.to_string()))?;

        let inference = InferenceConfiguration::builder()
            .max_tokens(self.config.max_tokens)
            .temperature(self.config.temperature)
            .build();

        info!(model_id, "invoking converse for plan generation");

        let response = self
            .client
            .converse()
            .model_id(model_id)
            .system(SystemContentBlock::Text(prompt.system.clone()))
            .messages(message)
            .inference_config(inference)
            .tool_config(plan_tool_config(schema)?)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                if err.is_throttling_exception() {
                    ServiceError::Throttled(err.to_string())
                } else {
                    ServiceError::Invocation(err.to_string())
                }
            })?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| ServiceError::ResponseParse("no message in response".to_string()))?;

        let content = reply_content(output_message.content());

        let usage = response.usage().map(tokens::extract_token_usage);
        if let Some(count) = usage {
            let priced = tokens::usage_for(model_id, count);
            info!(
                model_id,
                input_tokens = count.input,
                output_tokens = count.output,
                cost_usd = priced.cost_usd,
                stop_reason = response.stop_reason().as_str(),
                structured = matches!(content, ReplyContent::Structured(_)),
                "converse complete"
            );
        }

        Ok(ServiceReply { content, usage })
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_bedrockruntime::types::ToolUseBlock;
    use serde_json::json;

    use super::*;
    use crate::schema::plan_schema;

    #[test]
    fn tool_config_builds_from_plan_schema() {
        let config = plan_tool_config(&plan_schema()).expect("tool config should build");
        assert_eq!(config.tools().len(), 1);
        assert!(matches!(config.tool_choice(), Some(ToolChoice::Tool(_))));
    }

    #[test]
    fn tool_use_input_wins_over_text() {
        let input = json!({"dailyIntention": "Paz"});
        let tool_use = ToolUseBlock::builder()
            .tool_use_id("tooluse_1")
            .name(PLAN_TOOL_NAME)
            .input(document::from_json(&input))
            .build()
            .expect("tool use block should build");

        let blocks = vec![
            ContentBlock::Text("Here is your plan.".to_string()),
            ContentBlock::ToolUse(tool_use),
        ];

        assert_eq!(reply_content(&blocks), ReplyContent::Structured(input));
    }

    #[test]
    fn text_blocks_are_joined_without_tool_use() {
        let blocks = vec![
            ContentBlock::Text("{\"a\":".to_string()),
            ContentBlock::Text("1}".to_string()),
        ];

        assert_eq!(reply_content(&blocks), ReplyContent::Text("{\"a\":1}".to_string()));
    }
}
