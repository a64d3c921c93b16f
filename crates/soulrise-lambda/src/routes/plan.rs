use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use soulrise_core::models::plan::GeneratedPlan;
use soulrise_core::models::request::GenerationRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// Generate a personalized plan from quiz answers and goals.
pub async fn generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GeneratedPlan>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let plan = state.generator.generate(request).await?;

    Ok(Json(GeneratedPlan {
        plan,
        generated_at: jiff::Timestamp::now(),
    }))
}
