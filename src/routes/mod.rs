mod flashcards;
mod health;
mod progress;
mod sessions;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::response::json_error;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/api/subjects", get(progress::list_subjects))
        .route("/api/subjects/:subjectId", get(progress::get_subject))
        .route(
            "/api/subjects/:subjectId/answers",
            post(progress::record_answer),
        )
        .route("/api/stats/overview", get(progress::overview))
        .route(
            "/api/flashcard-sets",
            get(flashcards::list_sets).post(flashcards::create_set),
        )
        .route("/api/flashcard-sets/:setId", get(flashcards::get_set))
        .route(
            "/api/flashcard-sets/:setId/study",
            get(flashcards::study_queue),
        )
        .route(
            "/api/flashcard-sets/:setId/cards/:cardId/review",
            post(flashcards::review_card),
        )
        .route(
            "/api/flashcard-sets/:setId/complete",
            post(flashcards::complete_session),
        )
        .route("/api/study-sessions", get(sessions::history));

    app = app.nest("/health", health::router());
    app = app.nest("/api/health", health::router());

    app.fallback(fallback_handler).with_state(state)
}

async fn fallback_handler() -> Response {
    json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "no such endpoint").into_response()
}
