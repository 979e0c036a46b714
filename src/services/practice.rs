use serde::Serialize;

use crate::response::AppError;
use crate::store::{ContentStore, Progress};

pub const FULL_SCORE: i32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum PracticeError {
    #[error("lesson {0} not found")]
    LessonNotFound(u32),
}

impl From<PracticeError> for AppError {
    fn from(err: PracticeError) -> Self {
        match err {
            PracticeError::LessonNotFound(_) => AppError::not_found("Lesson not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeResult {
    pub score: i32,
    pub progress: Progress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub completed_lessons: usize,
    pub total_lessons: usize,
    pub percent: f64,
}

/// Any non-empty answer earns the full score.
pub fn score_answer(answer: &str) -> i32 {
    if answer.is_empty() {
        0
    } else {
        FULL_SCORE
    }
}

/// Scores `answer` against the lesson and marks the lesson completed.
pub fn submit_practice(
    store: &ContentStore,
    lesson_id: u32,
    answer: &str,
) -> Result<PracticeResult, PracticeError> {
    if store.get_lesson(lesson_id).is_none() {
        return Err(PracticeError::LessonNotFound(lesson_id));
    }

    let score = score_answer(answer);
    let progress = store.upsert_progress(lesson_id, true, Some(score));
    tracing::info!(lesson_id, score, "practice submitted");

    Ok(PracticeResult { score, progress })
}

/// Share of catalog lessons with a completed progress record. Records that
/// point at lessons outside the catalog are ignored.
pub fn progress_summary(store: &ContentStore) -> ProgressSummary {
    let total_lessons = store.lesson_count();
    let completed_lessons = store
        .list_progress()
        .iter()
        .filter(|p| p.completed && store.get_lesson(p.lesson_id).is_some())
        .count();

    let percent = if total_lessons == 0 {
        0.0
    } else {
        completed_lessons as f64 / total_lessons as f64 * 100.0
    };

    ProgressSummary {
        completed_lessons,
        total_lessons,
        percent,
    }
}
