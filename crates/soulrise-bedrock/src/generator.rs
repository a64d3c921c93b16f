use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use soulrise_core::models::plan::PersonalizedPlan;
use soulrise_core::models::request::GenerationRequest;

use crate::config::GeneratorConfig;
use crate::error::PlanError;
use crate::prompt::{PlanPrompt, build_prompt};
use crate::schema::plan_schema;
use crate::service::{ReplyContent, TextGenerationService};

/// Turns quiz answers and goals into a validated [`PersonalizedPlan`].
///
/// Holds only read-only configuration and a shared service handle, so a
/// single generator can serve any number of concurrent requests.
pub struct PlanGenerator {
    service: Arc<dyn TextGenerationService>,
    config: GeneratorConfig,
    schema: Value,
}

impl PlanGenerator {
    pub fn new(service: Arc<dyn TextGenerationService>, config: GeneratorConfig) -> Self {
        Self {
            service,
            config,
            schema: plan_schema(),
        }
    }

    /// The prompt `generate` would send for this request.
    pub fn prompt_for(&self, request: &GenerationRequest) -> PlanPrompt {
        build_prompt(request, &self.config.language)
    }

    /// Generate a plan with exactly one call to the text-generation service.
    ///
    /// Invalid requests fail before the service is called. Dropping the
    /// returned future, or hitting the configured timeout, cancels the
    /// in-flight call.
    pub async fn generate(&self, request: GenerationRequest) -> Result<PersonalizedPlan, PlanError> {
        request
            .quiz_answers
            .validate()
            .map_err(PlanError::Validation)?;

        let generation_id = Uuid::new_v4();
        let prompt = self.prompt_for(&request);
        let started = Instant::now();

        info!(
            generation_id = %generation_id,
            goals = request.goals.len(),
            "starting plan generation"
        );

        let reply = match tokio::time::timeout(
            self.config.timeout,
            self.service.generate(&prompt, &self.schema),
        )
        .await
        {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                let err = PlanError::from(e);
                warn!(
                    generation_id = %generation_id,
                    code = err.code(),
                    error = %err,
                    "plan generation failed"
                );
                return Err(err);
            }
            Err(_) => {
                let err = PlanError::TimedOut(self.config.timeout);
                warn!(
                    generation_id = %generation_id,
                    code = err.code(),
                    timeout_ms = self.config.timeout.as_millis() as u64,
                    "text generation timed out"
                );
                return Err(err);
            }
        };

        let total_tokens = reply.usage.map(|u| u.total());
        let plan = parse_reply(reply.content).inspect_err(|e| {
            warn!(
                generation_id = %generation_id,
                code = e.code(),
                error = %e,
                "rejected malformed plan"
            );
        })?;

        info!(
            generation_id = %generation_id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            total_tokens,
            "plan generation complete"
        );

        Ok(plan)
    }
}

/// Strictly parse a service reply into a complete plan.
///
/// Text replies must consist of a single JSON object and nothing else.
/// Missing, unknown, non-string, or blank fields are all rejected.
pub fn parse_reply(content: ReplyContent) -> Result<PersonalizedPlan, PlanError> {
    let parsed = match content {
        ReplyContent::Structured(value) => serde_json::from_value::<PersonalizedPlan>(value),
        ReplyContent::Text(text) => serde_json::from_str::<PersonalizedPlan>(text.trim()),
    };

    let plan = parsed.map_err(|e| {
        PlanError::MalformedResponse(format!("failed to parse PersonalizedPlan: {e}"))
    })?;

    plan.validate()
        .map_err(|e| PlanError::MalformedResponse(e.to_string()))?;

    Ok(plan)
}
