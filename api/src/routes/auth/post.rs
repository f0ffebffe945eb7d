use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use services::user_service::{LoginInput, SignupInput, UserService};
use util::state::AppState;

use crate::auth::generate_jwt;
use crate::response::{ApiResponse, ApiResult};
use crate::routes::common::UserResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub expires_at: String,
    pub user: UserResponse,
}

/// POST /api/auth/signup
///
/// Registers a new account and returns a token for it.
///
/// ### Request Body
/// ```json
/// {
///   "email": "sam@example.com",
///   "password": "secret1",
///   "name": "Sam",
///   "role": "ORGANIZER"
/// }
/// ```
/// `role` is optional (`USER` by default) and may only be `USER` or `ORGANIZER`.
///
/// ### Responses
/// - `201 Created` with `{ token, expiresAt, user }`
/// - `400 Bad Request` on validation failure or a self-assigned `ADMIN` role
/// - `409 Conflict` if the email is already registered
pub async fn signup(
    State(app_state): State<AppState>,
    payload: Result<Json<SignupInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = payload?;
    let user = UserService::signup(app_state.db(), input).await?;
    let (token, expires_at) = generate_jwt(user.id, user.role)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            AuthResponse {
                token,
                expires_at,
                user: user.into(),
            },
            "User registered successfully",
        )),
    ))
}

/// POST /api/auth/login
///
/// ### Request Body
/// ```json
/// { "email": "sam@example.com", "password": "secret1" }
/// ```
///
/// ### Responses
/// - `200 OK` with `{ token, expiresAt, user }`
/// - `401 Unauthorized` with `{ "error": "Invalid email or password" }`
pub async fn login(
    State(app_state): State<AppState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = payload?;
    let user = UserService::login(app_state.db(), input).await?;
    let (token, expires_at) = generate_jwt(user.id, user.role)?;

    Ok(Json(ApiResponse::success(
        AuthResponse {
            token,
            expires_at,
            user: user.into(),
        },
        "Login successful",
    )))
}
