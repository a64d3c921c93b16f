use std::time::Duration;

pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Settings for the plan generator itself.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Language the plan is written in, as a BCP 47 tag.
    pub language: String,
    /// Upper bound on the single external call per generation.
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            language: "pt-BR".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Inference settings for the Bedrock Converse call.
#[derive(Debug, Clone)]
pub struct BedrockConfig {
    /// Inference profile ID, e.g. `us.anthropic.claude-sonnet-4-20250514-v1:0`.
    pub model_id: String,
    pub max_tokens: i32,
    pub temperature: f32,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_tokens: 1024,
            temperature: 0.7,
        }
    }
}
