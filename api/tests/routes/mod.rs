mod auth_test;
mod bookings_test;
mod health_test;
mod users_test;
