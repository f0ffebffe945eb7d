//! Route-layer guards.
//!
//! Each guard authenticates the request, reloads the caller's current role
//! from the database, inserts the `AuthUser` into the request extensions for
//! handlers to pick up via `Extension<AuthUser>`, and optionally checks that
//! role. Per-event ownership is decided later, in the services.
//!
//! The role claim in the token is only a snapshot from login; an admin's role
//! change applies to the very next request.

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use db::models::user::{self, Role};
use sea_orm::EntityTrait;
use services::access::can_create_events;
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::response::ApiError;

/// Extracts and validates the user, refreshes its role, then inserts it back
/// into the request.
///
/// A token whose user no longer exists is treated as unauthenticated.
async fn extract_and_insert_authuser(
    app_state: &AppState,
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), ApiError> {
    let (mut parts, body) = req.into_parts();
    let mut user = AuthUser::from_request_parts(&mut parts, &()).await?;

    let current = user::Entity::find_by_id(user.id())
        .one(app_state.db())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = user.id(), "Failed to load user for auth");
            ApiError::Internal
        })?
        .ok_or_else(ApiError::unauthenticated)?;

    if current.role != user.role() {
        tracing::debug!(
            user_id = user.id(),
            token_role = %user.role(),
            current_role = %current.role,
            "Token role is stale"
        );
        user.0.role = current.role;
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (req, _user) = extract_and_insert_authuser(&app_state, req).await?;

    Ok(next.run(req).await)
}

/// Organizers and admins only.
pub async fn allow_organizer(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (req, user) = extract_and_insert_authuser(&app_state, req).await?;

    if !can_create_events(user.role()) {
        return Err(ApiError::Forbidden("Organizer access required".into()));
    }

    Ok(next.run(req).await)
}

/// Admin-only guard.
pub async fn allow_admin(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (req, user) = extract_and_insert_authuser(&app_state, req).await?;

    match user.role() {
        Role::Admin => Ok(next.run(req).await),
        Role::Organizer | Role::User => Err(ApiError::Forbidden("Admin access required".into())),
    }
}
