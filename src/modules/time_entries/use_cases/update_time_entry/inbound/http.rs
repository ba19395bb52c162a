use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::Value;

use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return ApplicationError::MalformedBody(rejection.body_text()).into_response();
        }
    };

    match state.update_handler.handle(id, body).await {
        Ok(entry) => Json(entry).into_response(),
        Err(err) => err.into_response(),
    }
}
