pub mod access;
pub mod booking_service;
pub mod error;
pub mod event_service;
pub mod user_service;
pub mod validation;

pub use error::{ServiceError, ServiceResult};
