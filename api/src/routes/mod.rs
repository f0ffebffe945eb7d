//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Signup and login (public), current user (authenticated)
//! - `/events` → Browsing (public) and event management (organizers/admins)
//! - `/bookings` → RSVPs and interest (authenticated)
//! - `/users` → Role administration (admin-only)

use axum::{Router, middleware::from_fn_with_state};
use util::state::AppState;

use crate::auth::guards::{allow_admin, allow_authenticated};
use crate::routes::{
    auth::auth_routes, bookings::bookings_routes, events::events_routes, health::health_routes,
    users::users_routes,
};

pub mod auth;
pub mod bookings;
pub mod common;
pub mod events;
pub mod health;
pub mod users;

/// Builds the complete application router for all HTTP endpoints.
///
/// Guards on `/bookings` and `/users` apply to the whole group. `/auth` and
/// `/events` mix public and protected routes, so their guards are attached
/// per route inside the group.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes(app_state.clone()))
        .nest("/events", events_routes(app_state.clone()))
        .nest(
            "/bookings",
            bookings_routes()
                .route_layer(from_fn_with_state(app_state.clone(), allow_authenticated)),
        )
        .nest(
            "/users",
            users_routes().route_layer(from_fn_with_state(app_state.clone(), allow_admin)),
        )
        .with_state(app_state)
}
