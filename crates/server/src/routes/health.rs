use crate::state::AppState;
use axum::{extract::State, http::StatusCode};
use log::error;

/// Reports whether the server can still reach its database
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database reachable", content_type = "text/plain", body = String),
        (status = 503, description = "Database unreachable", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            error!("Health check failed: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
        }
    }
}
