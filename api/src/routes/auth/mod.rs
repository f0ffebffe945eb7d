//! # auth Routes Module
//!
//! - `post.rs`: signup and login
//! - `get.rs`: current user info

pub mod get;
pub mod post;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;
use get::get_me;
use post::{login, signup};

/// Builds the `/auth` route group.
///
/// - `POST /auth/signup` → `signup`
/// - `POST /auth/login` → `login`
/// - `GET /auth/me` → `get_me` (authenticated)
pub fn auth_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route(
            "/me",
            get(get_me).route_layer(from_fn_with_state(app_state, allow_authenticated)),
        )
}
