use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use soulrise_bedrock::converse::BedrockPlanService;
use soulrise_bedrock::generator::PlanGenerator;

mod config;
mod error;
mod middleware;
mod routes;
mod state;

use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = AppConfig::from_env()?;

    // Credentials come from the execution role; nothing here reaches clients.
    let client = soulrise_bedrock::client::build_client_with_region(&config.region).await;
    let service = BedrockPlanService::new(client, config.bedrock.clone());
    let generator = PlanGenerator::new(Arc::new(service), config.generator.clone());

    tracing::info!(
        region = %config.region,
        model_id = %config.bedrock.model_id,
        language = %config.generator.language,
        timeout_ms = config.generator.timeout.as_millis() as u64,
        "plan generator ready"
    );

    let state = AppState {
        generator: Arc::new(generator),
    };

    lambda_http::run(routes::router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
