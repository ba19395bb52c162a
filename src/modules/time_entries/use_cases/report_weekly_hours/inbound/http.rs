use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.weekly_handler.handle().await {
        Ok(report) => Json(report).into_response(),
        Err(err) => err.into_response(),
    }
}
