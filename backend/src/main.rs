use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config;
mod handlers {
    pub mod analysis_handlers;
}
mod api {
    pub mod llm_analysis;
}
mod models {
    pub mod analysis_models;
}
mod jobs {
    pub mod analysis_worker;
}

use config::AppConfig;
use handlers::analysis_handlers;
use api::llm_analysis::LlmAnalyst;
use jobs::analysis_worker::{spawn_analysis_worker, AnalysisQueue};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    analysis_queue: AnalysisQueue,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/analyze", post(analysis_handlers::analyze))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // The frontend is served from another origin in development
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let analyst = Arc::new(LlmAnalyst::new(config.analysis.clone()));
    let (analysis_queue, _worker) = spawn_analysis_worker(analyst);
    tracing::info!(
        "Forwarding answers to {} using model {}",
        config.analysis.api_url,
        config.analysis.model
    );

    let state = Arc::new(AppState { analysis_queue });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tokio::sync::mpsc::UnboundedReceiver;
    use tower::ServiceExt;

    use crate::models::analysis_models::AnalysisJob;

    fn test_app() -> (Router, UnboundedReceiver<AnalysisJob>) {
        let (analysis_queue, receiver) = AnalysisQueue::channel();
        (build_router(Arc::new(AppState { analysis_queue })), receiver)
    }

    fn analyze_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let (app, _receiver) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn valid_answer_is_queued_verbatim() {
        let (app, mut receiver) = test_app();
        let response = app
            .oneshot(analyze_request(json!({
                "question": "In che settore operi?",
                "answer": " Moda ",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body = json_body(response).await;
        assert_eq!(body["status"], "queued");

        let job = receiver.try_recv().unwrap();
        assert_eq!(job.question, "In che settore operi?");
        assert_eq!(job.answer, " Moda ");
        assert_eq!(body["id"], job.id.to_string());
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn blank_answer_is_rejected_and_not_queued() {
        let (app, mut receiver) = test_app();
        let response = app
            .oneshot(analyze_request(json!({
                "question": "In che settore operi?",
                "answer": "   ",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Answer must not be empty");
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn blank_question_is_rejected() {
        let (app, _receiver) = test_app();
        let response = app
            .oneshot(analyze_request(json!({"question": "", "answer": "Moda"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn stopped_worker_yields_service_unavailable() {
        let (app, receiver) = test_app();
        drop(receiver);
        let response = app
            .oneshot(analyze_request(json!({"question": "Q1", "answer": "A1"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
