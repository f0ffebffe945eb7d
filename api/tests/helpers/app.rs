use api::{auth::generate_jwt, routes::routes};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE},
    response::Response,
};
use chrono::{DateTime, Utc};
use db::{
    models::{
        event,
        user::{self, Role},
    },
    test_utils::setup_test_db,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;
use tower::ServiceExt;
use util::{config::AppConfig, state::AppState};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Router mounted under `/api` over a fresh in-memory database.
///
/// `log_request` is left out: it needs `ConnectInfo`, which `oneshot` does not
/// provide.
pub async fn make_test_app() -> (Router, DatabaseConnection) {
    AppConfig::set_jwt_secret(TEST_JWT_SECRET);
    AppConfig::set_jwt_duration_minutes(60u64);

    let db = setup_test_db().await;
    let app = Router::new().nest("/api", routes(AppState::new(db.clone())));
    (app, db)
}

pub async fn create_user(db: &DatabaseConnection, email: &str, role: Role) -> (user::Model, String) {
    let user = user::Model::create(db, email, "Test User", "password123", role)
        .await
        .expect("Failed to create user");
    let (token, _) = generate_jwt(user.id, user.role).expect("Failed to sign token");
    (user, token)
}

pub async fn create_event(
    db: &DatabaseConnection,
    organizer_id: i64,
    title: &str,
    category: &str,
    date: DateTime<Utc>,
) -> event::Model {
    let now = Utc::now();
    event::ActiveModel {
        title: Set(title.to_owned()),
        description: Set(format!("{title} description text")),
        location: Set("Community Hall".into()),
        category: Set(category.to_owned()),
        date: Set(date),
        price: Set(0.0),
        image: Set(None),
        organizer_id: Set(organizer_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create event")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Builds a request with an optional bearer token and JSON body.
pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, bearer(token));
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Sends one request and returns the status with the decoded JSON body.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    (status, get_json_body(response).await)
}
