use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use soulrise_bedrock::error::PlanError;
use soulrise_core::error::CoreError;

/// Message shown for every generation failure. Internal detail stays in the logs.
pub const GENERATION_FAILED_MESSAGE: &str = "Could not generate your plan. Please try again.";

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    MissingAnswers(Vec<&'static str>),
    Generation(PlanError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: msg,
                    code: "bad_request",
                    fields: Vec::new(),
                },
            ),
            ApiError::MissingAnswers(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: "Please answer every quiz question.".to_string(),
                    code: "invalid_request",
                    fields,
                },
            ),
            // Already logged by the generator; only the code reaches the client.
            ApiError::Generation(e) => {
                let status = match e {
                    PlanError::TimedOut(_) => StatusCode::GATEWAY_TIMEOUT,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (
                    status,
                    ErrorBody {
                        error: GENERATION_FAILED_MESSAGE.to_string(),
                        code: e.code(),
                        fields: Vec::new(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<PlanError> for ApiError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Validation(CoreError::MissingAnswers(fields)) => {
                ApiError::MissingAnswers(fields)
            }
            PlanError::Validation(other) => ApiError::BadRequest(other.to_string()),
            other => ApiError::Generation(other),
        }
    }
}
