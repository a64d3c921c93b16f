use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::middleware;
use crate::state::AppState;

pub mod health;
pub mod plan;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/plan", post(plan::generate_plan))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use soulrise_bedrock::config::GeneratorConfig;
    use soulrise_bedrock::error::ServiceError;
    use soulrise_bedrock::generator::PlanGenerator;
    use soulrise_bedrock::prompt::PlanPrompt;
    use soulrise_bedrock::service::{ReplyContent, ServiceReply, TextGenerationService};

    use super::*;
    use crate::error::GENERATION_FAILED_MESSAGE;

    enum Outcome {
        Plan(Value),
        Fail,
        Hang,
    }

    struct StubService {
        outcome: Outcome,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TextGenerationService for StubService {
        async fn generate(
            &self,
            _prompt: &PlanPrompt,
            _schema: &Value,
        ) -> Result<ServiceReply, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Outcome::Plan(plan) => Ok(ServiceReply {
                    content: ReplyContent::Structured(plan.clone()),
                    usage: None,
                }),
                Outcome::Fail => Err(ServiceError::Invocation(
                    "AccessDeniedException: secret internal detail".to_string(),
                )),
                Outcome::Hang => std::future::pending().await,
            }
        }
    }

    fn plan_json() -> Value {
        json!({
            "dailyIntention": "Hoje escolho a calma.",
            "mainAction": "Ore por cinco minutos.",
            "complementaryAction": "Anote uma gratidão.",
            "ritual": "Acenda uma vela ao anoitecer.",
            "affirmation": "Eu sou constante.",
            "weeklyFocus": "Consistência"
        })
    }

    fn request_json() -> Value {
        json!({
            "goals": ["consistência"],
            "quizAnswers": {
                "gender": "feminino",
                "motivation": "saúde mental",
                "emotionalState": "ansiosa",
                "routine": "manhãs ocupadas",
                "timeAvailable": "5 minutos",
                "spirituality": "cristã",
                "lacking": "disciplina",
                "commitment": "alta"
            }
        })
    }

    fn app(outcome: Outcome) -> (Router, Arc<StubService>) {
        let service = Arc::new(StubService {
            outcome,
            calls: AtomicUsize::new(0),
        });
        let config = GeneratorConfig {
            timeout: Duration::from_millis(50),
            ..GeneratorConfig::default()
        };
        let state = AppState {
            generator: Arc::new(PlanGenerator::new(service.clone(), config)),
        };
        (router(state), service)
    }

    async fn post_plan(app: Router, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post("/plan")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        let value = serde_json::from_slice(&bytes).expect("body should be JSON");
        (status, value)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (app, _) = app(Outcome::Fail);
        let response = app
            .oneshot(
                Request::get("/health")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn plan_is_returned_with_timestamp() {
        let (app, service) = app(Outcome::Plan(plan_json()));
        let (status, body) = post_plan(app, request_json().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["plan"], plan_json());
        assert!(body["generatedAt"].is_string());
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_answers_are_listed() {
        let mut request = request_json();
        request["quizAnswers"]
            .as_object_mut()
            .unwrap()
            .remove("routine");

        let (app, service) = app(Outcome::Plan(plan_json()));
        let (status, body) = post_plan(app, request.to_string()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["fields"], json!(["routine"]));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn null_answer_is_listed_as_missing() {
        let mut request = request_json();
        request["quizAnswers"]["gender"] = Value::Null;

        let (app, service) = app(Outcome::Plan(plan_json()));
        let (status, body) = post_plan(app, request.to_string()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["fields"], json!(["gender"]));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn service_failure_is_generic() {
        let (app, _) = app(Outcome::Fail);
        let (status, body) = post_plan(app, request_json().to_string()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], GENERATION_FAILED_MESSAGE);
        assert_eq!(body["code"], "generation_service_error");
        assert!(!body.to_string().contains("secret internal detail"));
    }

    #[tokio::test]
    async fn malformed_plan_is_generic() {
        let mut plan = plan_json();
        plan.as_object_mut().unwrap().remove("ritual");

        let (app, _) = app(Outcome::Plan(plan));
        let (status, body) = post_plan(app, request_json().to_string()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], GENERATION_FAILED_MESSAGE);
        assert_eq!(body["code"], "malformed_response");
    }

    #[tokio::test]
    async fn timeout_maps_to_gateway_timeout() {
        let (app, _) = app(Outcome::Hang);
        let (status, body) = post_plan(app, request_json().to_string()).await;

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["code"], "timed_out");
    }

    #[tokio::test]
    async fn invalid_json_is_a_bad_request() {
        let (app, service) = app(Outcome::Plan(plan_json()));
        let (status, body) = post_plan(app, "{not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "bad_request");
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }
}
