#[cfg(test)]
mod tests {
    use crate::helpers::{create_user, json_request, make_test_app, send};
    use axum::http::StatusCode;
    use db::models::user::Role;
    use chrono::{Duration, Utc};
    use serde_json::json;

    #[tokio::test]
    async fn test_admin_promotes_user_to_organizer() {
        let (app, db) = make_test_app().await;
        let (_, admin_token) = create_user(&db, "admin@example.com", Role::Admin).await;
        let (target, _) = create_user(&db, "user@example.com", Role::User).await;

        let uri = format!("/api/users/{}/role", target.id);
        let (status, json) = send(
            &app,
            json_request("PUT", &uri, Some(&admin_token), Some(json!({ "role": "ORGANIZER" }))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["role"], "ORGANIZER");
    }

    #[tokio::test]
    async fn test_non_admin_cannot_change_roles() {
        let (app, db) = make_test_app().await;
        let (organizer, token) = create_user(&db, "org@example.com", Role::Organizer).await;

        let uri = format!("/api/users/{}/role", organizer.id);
        let (status, _) = send(
            &app,
            json_request("PUT", &uri, Some(&token), Some(json!({ "role": "ADMIN" }))),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_user_and_role() {
        let (app, db) = make_test_app().await;
        let (_, admin_token) = create_user(&db, "admin@example.com", Role::Admin).await;

        let (status, json) = send(
            &app,
            json_request("PUT", "/api/users/999/role", Some(&admin_token), Some(json!({ "role": "USER" }))),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "User not found");

        let (status, _) = send(
            &app,
            json_request("PUT", "/api/users/1/role", Some(&admin_token), Some(json!({ "role": "SUPERUSER" }))),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_demoted_organizer_loses_access_with_existing_token() {
        let (app, db) = make_test_app().await;
        let (_, admin_token) = create_user(&db, "admin@example.com", Role::Admin).await;
        let (organizer, org_token) = create_user(&db, "org@example.com", Role::Organizer).await;

        let uri = format!("/api/users/{}/role", organizer.id);
        let (status, _) = send(
            &app,
            json_request("PUT", &uri, Some(&admin_token), Some(json!({ "role": "USER" }))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let payload = json!({
            "title": "Still mine",
            "description": "An event posted after demotion",
            "location": "Riverside Park",
            "category": "community",
            "date": (Utc::now() + Duration::days(3)).to_rfc3339(),
        });
        let (status, json) = send(
            &app,
            json_request("POST", "/api/events", Some(&org_token), Some(payload)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["error"], "Organizer access required");
    }

    #[tokio::test]
    async fn test_demoted_admin_loses_admin_routes() {
        let (app, db) = make_test_app().await;
        let (first, first_token) = create_user(&db, "first@example.com", Role::Admin).await;
        let (_, second_token) = create_user(&db, "second@example.com", Role::Admin).await;

        let uri = format!("/api/users/{}/role", first.id);
        let (status, _) = send(
            &app,
            json_request("PUT", &uri, Some(&second_token), Some(json!({ "role": "USER" }))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            json_request("PUT", &uri, Some(&first_token), Some(json!({ "role": "ADMIN" }))),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_promotion_applies_without_new_login() {
        let (app, db) = make_test_app().await;
        let (_, admin_token) = create_user(&db, "admin@example.com", Role::Admin).await;
        let (target, user_token) = create_user(&db, "user@example.com", Role::User).await;

        let uri = format!("/api/users/{}/role", target.id);
        send(
            &app,
            json_request("PUT", &uri, Some(&admin_token), Some(json!({ "role": "ORGANIZER" }))),
        )
        .await;

        let (status, _) = send(
            &app,
            json_request("GET", "/api/events/organized", Some(&user_token), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}
