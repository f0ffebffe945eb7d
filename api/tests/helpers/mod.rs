pub mod app;

pub use app::{
    bearer, create_event, create_user, get_json_body, json_request, make_test_app, send,
};
