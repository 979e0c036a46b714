use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use bytes::Bytes;
use serde::Deserialize;

use super::{parse_json_body, parse_lesson_id};
use crate::response::AppError;
use crate::services::practice::submit_practice;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct PracticeRequest {
    answer: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/:lesson_id", post(submit))
}

async fn submit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let lesson_id = parse_lesson_id(&raw_id)?;
    let payload: PracticeRequest = parse_json_body(&body)?;
    let result = submit_practice(state.store(), lesson_id, &payload.answer)?;
    Ok(Json(result))
}
