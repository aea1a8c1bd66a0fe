use std::sync::Arc;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde_json::{json, Value};

use crate::models::analysis_models::{AnalysisJob, AnalyzeRequest};
use crate::AppState;

/// Accepts one question/answer pair and queues it for analysis. Returns as
/// soon as the job is queued; the assessment itself is never sent back.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    if request.question.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Question must not be empty"}))
        ));
    }
    if request.answer.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Answer must not be empty"}))
        ));
    }

    let job = AnalysisJob::new(request);
    let job_id = job.id;

    state.analysis_queue.enqueue(job).map_err(|e| {
        tracing::error!(%job_id, "Failed to queue analysis: {}", e);
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"error": e.to_string()}))
        )
    })?;

    tracing::info!(%job_id, "Queued answer for analysis");
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "status": "queued",
            "id": job_id,
        }))
    ))
}
