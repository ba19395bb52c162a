use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.delete_handler.handle(id).await {
        Ok(entry) => Json(entry).into_response(),
        Err(err) => err.into_response(),
    }
}
