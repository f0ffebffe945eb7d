pub mod m202510010001_create_users;
pub mod m202510010002_create_events;
pub mod m202510010003_create_bookings;
