//! # users Routes Module
//!
//! Admin-only; the guard is applied where the group is nested.

pub mod put;

use axum::{Router, routing::put};
use util::state::AppState;

use put::update_user_role;

/// - `PUT /users/{user_id}/role` → `update_user_role`
pub fn users_routes() -> Router<AppState> {
    Router::new().route("/{user_id}/role", put(update_user_role))
}
