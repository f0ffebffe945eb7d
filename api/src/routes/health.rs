use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde::Serialize;
use util::state::AppState;

use crate::response::{ApiError, ApiResponse, ApiResult};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
}

/// GET /health
///
/// Liveness plus a database ping.
///
/// ### Responses
/// - `200 OK` with `{ "status": "OK", "database": "up" }` as `data`
/// - `500 Internal Server Error` if the database does not answer
async fn health_check(State(app_state): State<AppState>) -> ApiResult<impl IntoResponse> {
    app_state.db().ping().await.map_err(|e| {
        tracing::error!(error = %e, "Health check could not reach the database");
        ApiError::Internal
    })?;

    Ok(Json(ApiResponse::success(
        HealthStatus { status: "OK", database: "up" },
        "Health check passed",
    )))
}
