use std::sync::Arc;

use soulrise_bedrock::generator::PlanGenerator;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<PlanGenerator>,
}
