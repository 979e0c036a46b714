use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::parse_lesson_id;
use crate::response::AppError;
use crate::state::AppState;
use crate::store::{Lesson, LessonContent};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LessonDto {
    id: u32,
    title: String,
    r#type: String,
    /// Serialized payload; clients parse it according to `type`.
    content: String,
    order: i32,
    audio_url: Option<String>,
}

impl From<Lesson> for LessonDto {
    fn from(lesson: Lesson) -> Self {
        Self {
            id: lesson.id,
            r#type: lesson.kind().to_string(),
            content: lesson.content.to_json_string(),
            title: lesson.title,
            order: lesson.order,
            audio_url: lesson.audio_url,
        }
    }
}

#[derive(Debug, Serialize)]
struct CharacterItem {
    character: String,
    description: String,
}

#[derive(Debug, Serialize)]
struct ExampleItem {
    text: String,
    translation: String,
}

/// Lesson payload broken into displayable items. Lists that do not apply to
/// the lesson's type are empty.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LessonItemsDto {
    lesson_id: u32,
    r#type: String,
    characters: Vec<CharacterItem>,
    rules: Vec<String>,
    examples: Vec<ExampleItem>,
}

impl From<&Lesson> for LessonItemsDto {
    fn from(lesson: &Lesson) -> Self {
        let mut items = Self {
            lesson_id: lesson.id,
            r#type: lesson.kind().to_string(),
            characters: Vec::new(),
            rules: Vec::new(),
            examples: Vec::new(),
        };

        match &lesson.content {
            LessonContent::Alphabet(alphabet) => {
                items.characters = alphabet
                    .pairs()
                    .map(|(character, description)| CharacterItem {
                        character: character.to_string(),
                        description: description.to_string(),
                    })
                    .collect();
            }
            LessonContent::Grammar(grammar) => {
                items.rules = grammar.rules.clone();
                items.examples = grammar
                    .parsed_examples()
                    .map(|example| ExampleItem {
                        text: example.text.to_string(),
                        translation: example.translation.to_string(),
                    })
                    .collect();
            }
            LessonContent::Other { .. } => {}
        }

        items
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_lessons))
        .route("/:id", get(get_lesson))
        .route("/:id/items", get(get_lesson_items))
        .route("/type/:type", get(list_lessons_by_type))
}

async fn list_lessons(State(state): State<AppState>) -> impl IntoResponse {
    Json(to_dtos(state.store().list_lessons()))
}

async fn get_lesson(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_lesson_id(&raw_id)?;
    let lesson = state
        .store()
        .get_lesson(id)
        .ok_or_else(|| AppError::not_found("Lesson not found"))?;
    Ok(Json(LessonDto::from(lesson)))
}

async fn get_lesson_items(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_lesson_id(&raw_id)?;
    let lesson = state
        .store()
        .get_lesson(id)
        .ok_or_else(|| AppError::not_found("Lesson not found"))?;
    Ok(Json(LessonItemsDto::from(&lesson)))
}

async fn list_lessons_by_type(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> impl IntoResponse {
    Json(to_dtos(state.store().list_lessons_by_type(&kind)))
}

fn to_dtos(lessons: Vec<Lesson>) -> Vec<LessonDto> {
    lessons.into_iter().map(LessonDto::from).collect()
}
