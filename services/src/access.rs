//! Capability checks for event publishing and management.
//!
//! These are pure functions over the caller's identity. Route guards decide
//! whether a role may reach an endpoint at all; the services call these to
//! decide whether the caller may act on a particular event.

use db::models::{event, user::Role};

/// The authenticated caller of a service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub id: i64,
    pub role: Role,
}

impl Requester {
    pub fn new(id: i64, role: Role) -> Self {
        Self { id, role }
    }
}

pub fn can_create_events(role: Role) -> bool {
    match role {
        Role::Organizer | Role::Admin => true,
        Role::User => false,
    }
}

/// Owners manage their own events; admins manage every event.
pub fn can_manage_event(requester: &Requester, event: &event::Model) -> bool {
    match requester.role {
        Role::Admin => true,
        Role::Organizer | Role::User => requester.id == event.organizer_id,
    }
}

pub fn can_change_roles(role: Role) -> bool {
    match role {
        Role::Admin => true,
        Role::Organizer | Role::User => false,
    }
}
