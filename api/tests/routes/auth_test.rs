#[cfg(test)]
mod tests {
    use crate::helpers::{create_user, json_request, make_test_app, send};
    use axum::http::StatusCode;
    use db::models::user::{self, Role};
    use sea_orm::EntityTrait;
    use serde_json::json;

    #[tokio::test]
    async fn test_signup_returns_token_usable_on_me() {
        let (app, _db) = make_test_app().await;

        let payload = json!({
            "email": "Sam@Example.com",
            "password": "secret1",
            "name": "Sam",
            "role": "ORGANIZER"
        });
        let (status, json) = send(&app, json_request("POST", "/api/auth/signup", None, Some(payload))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["user"]["email"], "sam@example.com");
        assert_eq!(json["data"]["user"]["role"], "ORGANIZER");
        assert!(json["data"]["user"].get("passwordHash").is_none());
        assert!(json["data"]["expiresAt"].as_str().is_some());

        let token = json["data"]["token"].as_str().unwrap().to_owned();
        let (status, me) = send(&app, json_request("GET", "/api/auth/me", Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["data"]["name"], "Sam");
    }

    #[tokio::test]
    async fn test_signup_rejects_admin_role() {
        let (app, _db) = make_test_app().await;

        let payload = json!({
            "email": "root@example.com",
            "password": "secret1",
            "name": "Root",
            "role": "ADMIN"
        });
        let (status, json) = send(&app, json_request("POST", "/api/auth/signup", None, Some(payload))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_conflicts() {
        let (app, db) = make_test_app().await;
        create_user(&db, "taken@example.com", Role::User).await;

        let payload = json!({ "email": "taken@example.com", "password": "secret1", "name": "Dup" });
        let (status, _) = send(&app, json_request("POST", "/api/auth/signup", None, Some(payload))).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_signup_short_password() {
        let (app, _db) = make_test_app().await;

        let payload = json!({ "email": "p@example.com", "password": "123", "name": "Pat" });
        let (status, json) = send(&app, json_request("POST", "/api/auth/signup", None, Some(payload))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Password must be at least 6 characters long");
    }

    #[tokio::test]
    async fn test_login_success_and_failure() {
        let (app, db) = make_test_app().await;
        create_user(&db, "lee@example.com", Role::User).await;

        let ok = json!({ "email": "lee@example.com", "password": "password123" });
        let (status, json) = send(&app, json_request("POST", "/api/auth/login", None, Some(ok))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["data"]["token"].as_str().is_some());

        let bad = json!({ "email": "lee@example.com", "password": "nope" });
        let (status, json) = send(&app, json_request("POST", "/api/auth/login", None, Some(bad))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, json!({ "error": "Invalid email or password" }));
    }

    #[tokio::test]
    async fn test_me_requires_valid_token() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, json_request("GET", "/api/auth/me", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Authentication required");

        let (status, _) = send(&app, json_request("GET", "/api/auth/me", Some("not.a.jwt"), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (app, _db) = make_test_app().await;

        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let (status, json) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_token_of_deleted_user_is_rejected() {
        let (app, db) = make_test_app().await;
        let (account, token) = create_user(&db, "gone@example.com", Role::User).await;

        user::Entity::delete_by_id(account.id).exec(&db).await.unwrap();

        let (status, json) = send(&app, json_request("GET", "/api/auth/me", Some(&token), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Authentication required");
    }
}
