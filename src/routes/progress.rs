use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::response::{json_error, SuccessResponse};
use crate::services::progress;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordAnswerRequest {
    score: i64,
    correct: bool,
}

pub async fn list_subjects(State(state): State<AppState>) -> Response {
    let subjects = progress::list_subjects(state.store().as_ref());
    Json(SuccessResponse::new(subjects)).into_response()
}

pub async fn get_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
) -> Response {
    let record = progress::get_or_default(state.store().as_ref(), &subject_id);
    Json(SuccessResponse::new(record)).into_response()
}

pub async fn record_answer(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
    Json(payload): Json<RecordAnswerRequest>,
) -> Response {
    // the scoring core assumes 0..=100; clamp here, at the boundary
    let score = payload.score.clamp(0, 100) as u32;

    match progress::record_answer(state.store().as_ref(), &subject_id, score, payload.correct) {
        Ok(record) => Json(SuccessResponse::new(record)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, %subject_id, "record answer failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "internal server error",
            )
            .into_response()
        }
    }
}

pub async fn overview(State(state): State<AppState>) -> Response {
    let stats = progress::overview(state.store().as_ref());
    Json(SuccessResponse::new(stats)).into_response()
}
