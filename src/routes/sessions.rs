use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::SuccessResponse;
use crate::services::sessions;
use crate::state::AppState;

pub async fn history(State(state): State<AppState>) -> Response {
    let sessions = sessions::history(state.store().as_ref());
    Json(SuccessResponse::new(sessions)).into_response()
}
