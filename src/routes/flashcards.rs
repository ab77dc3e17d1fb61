use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use studypath_algo::{FlashcardSet, StudyMode, StudySession};

use crate::response::{json_error, SuccessResponse};
use crate::services::flashcards::{self, FlashcardError, NewCard, SessionFigures};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSetRequest {
    title: String,
    subject_id: String,
    #[serde(default)]
    cards: Vec<NewCard>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewRequest {
    correct: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StudyQuery {
    #[serde(default)]
    mode: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompleteSessionResponse {
    set: FlashcardSet,
    session: StudySession,
}

pub async fn list_sets(State(state): State<AppState>) -> Response {
    let sets = flashcards::list_sets(state.store().as_ref());
    Json(SuccessResponse::new(sets)).into_response()
}

pub async fn create_set(
    State(state): State<AppState>,
    Json(payload): Json<CreateSetRequest>,
) -> Response {
    if payload.title.trim().is_empty() {
        return json_error(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "title is required",
        )
        .into_response();
    }
    if payload.subject_id.trim().is_empty() {
        return json_error(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "subjectId is required",
        )
        .into_response();
    }

    match flashcards::create_set(
        state.store().as_ref(),
        payload.title.trim(),
        payload.subject_id.trim(),
        payload.cards,
    ) {
        Ok(set) => Json(SuccessResponse::new(set)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "create set failed");
            internal_error()
        }
    }
}

pub async fn get_set(State(state): State<AppState>, Path(set_id): Path<String>) -> Response {
    match flashcards::get_set(state.store().as_ref(), &set_id) {
        Ok(set) => Json(SuccessResponse::new(set)).into_response(),
        Err(err) => error_response(err, "get set failed"),
    }
}

pub async fn study_queue(
    State(state): State<AppState>,
    Path(set_id): Path<String>,
    Query(query): Query<StudyQuery>,
) -> Response {
    let raw_mode = query.mode.as_deref().unwrap_or("all");
    let Some(mode) = StudyMode::from_str(raw_mode) else {
        return json_error(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "mode must be one of all, difficult, random",
        )
        .into_response();
    };

    match flashcards::study_queue(state.store().as_ref(), &set_id, mode) {
        Ok(queue) => Json(SuccessResponse::new(queue)).into_response(),
        Err(err) => error_response(err, "study queue failed"),
    }
}

pub async fn review_card(
    State(state): State<AppState>,
    Path((set_id, card_id)): Path<(String, String)>,
    Json(payload): Json<ReviewRequest>,
) -> Response {
    match flashcards::review_card(state.store().as_ref(), &set_id, &card_id, payload.correct) {
        Ok(card) => Json(SuccessResponse::new(card)).into_response(),
        Err(err) => error_response(err, "review failed"),
    }
}

pub async fn complete_session(
    State(state): State<AppState>,
    Path(set_id): Path<String>,
    Json(figures): Json<SessionFigures>,
) -> Response {
    match flashcards::complete_session(state.store().as_ref(), &set_id, figures) {
        Ok((set, session)) => {
            Json(SuccessResponse::new(CompleteSessionResponse { set, session })).into_response()
        }
        Err(err) => error_response(err, "complete session failed"),
    }
}

fn error_response(err: FlashcardError, context: &'static str) -> Response {
    match err {
        FlashcardError::SetNotFound => {
            json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "flashcard set not found")
                .into_response()
        }
        FlashcardError::CardNotFound => {
            json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "card not found in set").into_response()
        }
        FlashcardError::Storage(err) => {
            tracing::warn!(error = %err, "{context}");
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "internal server error",
    )
    .into_response()
}
