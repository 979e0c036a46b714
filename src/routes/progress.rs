use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use serde::Deserialize;

use super::{parse_json_body, parse_lesson_id};
use crate::response::AppError;
use crate::services::practice;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct UpdateProgressRequest {
    completed: bool,
    /// `null` or missing leaves the stored score untouched.
    #[serde(default)]
    score: Option<i32>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_progress))
        .route("/summary", get(summary))
        .route("/:lesson_id", post(update_progress))
}

async fn list_progress(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store().list_progress())
}

async fn summary(State(state): State<AppState>) -> impl IntoResponse {
    Json(practice::progress_summary(state.store()))
}

async fn update_progress(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let lesson_id = parse_lesson_id(&raw_id)?;
    let payload: UpdateProgressRequest = parse_json_body(&body)?;

    let progress = state
        .store()
        .upsert_progress(lesson_id, payload.completed, payload.score);
    tracing::info!(
        lesson_id,
        completed = progress.completed,
        score = ?progress.score,
        "progress recorded"
    );

    Ok(Json(progress))
}
