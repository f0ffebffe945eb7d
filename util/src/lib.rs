pub mod config;
pub mod state;
pub mod timestamp;
pub mod urgency;
