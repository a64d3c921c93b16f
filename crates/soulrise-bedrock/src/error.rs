use std::time::Duration;

use soulrise_core::error::CoreError;
use thiserror::Error;

/// Failure reported by a text-generation backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("model invocation throttled: {0}")]
    Throttled(String),

    /// The call completed but carried nothing that could hold a plan.
    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}

/// Failure of a single plan generation.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The request was rejected before any external call was made.
    #[error("invalid generation request: {0}")]
    Validation(#[source] CoreError),

    #[error("text generation service failed: {0}")]
    Service(#[source] ServiceError),

    #[error("response did not conform to the plan schema: {0}")]
    MalformedResponse(String),

    /// The external call was cancelled after exceeding the configured timeout.
    #[error("text generation timed out after {0:?}")]
    TimedOut(Duration),
}

impl PlanError {
    pub fn code(&self) -> &'static str {
        match self {
            PlanError::Validation(_) => "invalid_request",
            PlanError::Service(_) => "generation_service_error",
            PlanError::MalformedResponse(_) => "malformed_response",
            PlanError::TimedOut(_) => "timed_out",
        }
    }

    /// Whether repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, PlanError::Validation(_))
    }
}

impl From<ServiceError> for PlanError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::ResponseParse(msg) => PlanError::MalformedResponse(msg),
            other => PlanError::Service(other),
        }
    }
}
