mod health;
mod lessons;
mod practice;
mod progress;

use axum::response::{IntoResponse, Response};
use axum::Router;
use serde::de::DeserializeOwned;

use crate::response::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/lessons", lessons::router())
        .nest("/api/progress", progress::router())
        .nest("/api/practice", practice::router())
        .nest("/health", health::router())
        .fallback(fallback_handler)
        .with_state(state)
}

async fn fallback_handler() -> Response {
    AppError::not_found("Not found").into_response()
}

/// Lesson ids are positive integers; anything else is a client error.
fn parse_lesson_id(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request("Invalid lesson id")),
    }
}

fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "rejected request body");
        AppError::bad_request(format!("Invalid request body: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_ids_must_be_positive_integers() {
        assert_eq!(parse_lesson_id("3").unwrap(), 3);
        assert_eq!(parse_lesson_id(" 12 ").unwrap(), 12);
        for raw in ["0", "-1", "abc", "1.5", ""] {
            assert!(parse_lesson_id(raw).is_err(), "{raw}");
        }
    }

    #[derive(Debug, serde::Deserialize)]
    struct Flag {
        completed: bool,
    }

    #[test]
    fn body_shape_errors_are_bad_requests() {
        let err = parse_json_body::<Flag>(br#"{"score": 10}"#).unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert!(parse_json_body::<Flag>(br#"{"completed": true}"#).unwrap().completed);
    }
}
