//! # events Routes Module
//!
//! - `get.rs`: listing, detail and the organizer dashboard
//! - `post.rs`: create
//! - `put.rs`: update
//! - `delete.rs`: delete
//! - `common.rs`: response shapes local to this group

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use util::state::AppState;

use crate::auth::guards::allow_organizer;
use delete::delete_event;
use get::{get_event, get_events, get_organized_events};
use post::create_event;
use put::update_event;

/// Builds the `/events` route group.
///
/// - `GET /events` → `get_events` (public)
/// - `POST /events` → `create_event` (organizer/admin)
/// - `GET /events/organized` → `get_organized_events` (organizer/admin)
/// - `GET /events/{event_id}` → `get_event` (public)
/// - `PUT /events/{event_id}` → `update_event` (organizer/admin, owner or admin)
/// - `DELETE /events/{event_id}` → `delete_event` (organizer/admin, owner or admin)
pub fn events_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_events).merge(
                post(create_event)
                    .route_layer(from_fn_with_state(app_state.clone(), allow_organizer)),
            ),
        )
        .route(
            "/organized",
            get(get_organized_events)
                .route_layer(from_fn_with_state(app_state.clone(), allow_organizer)),
        )
        .route(
            "/{event_id}",
            get(get_event).merge(
                put(update_event)
                    .delete(delete_event)
                    .route_layer(from_fn_with_state(app_state, allow_organizer)),
            ),
        )
}
