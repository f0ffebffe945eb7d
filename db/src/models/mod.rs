pub mod booking;
pub mod event;
pub mod user;

pub use booking::Entity as Booking;
pub use event::Entity as Event;
pub use user::Entity as User;
