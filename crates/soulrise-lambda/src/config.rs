use std::env;
use std::str::FromStr;
use std::time::Duration;

use soulrise_bedrock::config::{BedrockConfig, GeneratorConfig};

/// Process-wide settings, read once at cold start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub region: String,
    pub bedrock: BedrockConfig,
    pub generator: GeneratorConfig,
}

impl AppConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys fall back to defaults;
    /// set keys that fail to parse are an error.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bedrock_defaults = BedrockConfig::default();
        let generator_defaults = GeneratorConfig::default();

        let bedrock = BedrockConfig {
            model_id: get("SOULRISE_MODEL_ID").unwrap_or(bedrock_defaults.model_id),
            max_tokens: parse_or(&get, "SOULRISE_MAX_TOKENS", bedrock_defaults.max_tokens)?,
            temperature: parse_or(&get, "SOULRISE_TEMPERATURE", bedrock_defaults.temperature)?,
        };

        if !(0.0..=1.0).contains(&bedrock.temperature) {
            return Err(eyre::eyre!(
                "SOULRISE_TEMPERATURE must be between 0.0 and 1.0, got {}",
                bedrock.temperature
            ));
        }

        let timeout_secs = parse_or(
            &get,
            "SOULRISE_TIMEOUT_SECS",
            generator_defaults.timeout.as_secs(),
        )?;
        if timeout_secs == 0 {
            return Err(eyre::eyre!("SOULRISE_TIMEOUT_SECS must be greater than zero"));
        }

        let generator = GeneratorConfig {
            language: get("SOULRISE_LANGUAGE").unwrap_or(generator_defaults.language),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            region: get("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            bedrock,
            generator,
        })
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid {key} {raw:?}: {e}")),
        None => Ok(default),
    }
}
