use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::Response,
    routing::{get, put},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::time_entries::use_cases::create_time_entry::inbound::http as create_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::http as list_http;
use crate::modules::time_entries::use_cases::report_monthly_hours::inbound::http as monthly_http;
use crate::modules::time_entries::use_cases::report_weekly_hours::inbound::http as weekly_http;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::http as update_http;
use crate::shell::state::AppState;

const REPORTS_PREFIX: &str = "/api/hours/";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/events",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/api/events/{id}",
            put(update_http::handle).delete(delete_http::handle),
        )
        .route(
            "/api/hours/monthly",
            get(monthly_http::handle).options(no_content),
        )
        .route(
            "/api/hours/weekly",
            get(weekly_http::handle).options(no_content),
        )
        .with_state(state)
}

pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

/// The full application: routes plus CORS and request tracing.
pub fn app(state: AppState, allowed_origin: HeaderValue) -> Router {
    router(state)
        .layer(cors_layer(allowed_origin))
        .layer(middleware::from_fn(reports_options_no_content))
        .layer(TraceLayer::new_for_http())
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// OPTIONS on the report routes answers 204 with an empty body.
///
/// The CORS layer answers OPTIONS requests before they reach the routes, so the
/// status is rewritten on the way out.
async fn reports_options_no_content(request: Request, next: Next) -> Response {
    let is_report_options =
        request.method() == Method::OPTIONS && request.uri().path().starts_with(REPORTS_PREFIX);
    let mut response = next.run(request).await;
    if is_report_options && response.status().is_success() {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}
