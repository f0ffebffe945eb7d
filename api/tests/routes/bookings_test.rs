#[cfg(test)]
mod tests {
    use crate::helpers::{create_event, create_user, json_request, make_test_app, send};
    use axum::http::StatusCode;
    use chrono::{Duration, Utc};
    use db::models::{booking, user::Role};
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
    use serde_json::json;

    #[tokio::test]
    async fn test_rebooking_keeps_single_booking_with_latest_status() {
        let (app, db) = make_test_app().await;
        let (org, _) = create_user(&db, "org@example.com", Role::Organizer).await;
        let (fan, token) = create_user(&db, "fan@example.com", Role::User).await;
        let event = create_event(&db, org.id, "E1", "tech", Utc::now() + Duration::days(2)).await;

        let (status, json) = send(
            &app,
            json_request("POST", "/api/bookings", Some(&token), Some(json!({ "eventId": event.id, "status": "RSVP" }))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["status"], "RSVP");
        assert_eq!(json["data"]["event"]["title"], "E1");
        assert_eq!(json["data"]["event"]["location"], "Community Hall");

        let (status, json) = send(
            &app,
            json_request("POST", "/api/bookings", Some(&token), Some(json!({ "eventId": event.id, "status": "INTERESTED" }))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["status"], "INTERESTED");

        let rows = booking::Entity::find()
            .filter(booking::Column::UserId.eq(fan.id))
            .filter(booking::Column::EventId.eq(event.id))
            .all(&db)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, booking::BookingStatus::Interested);
    }

    #[tokio::test]
    async fn test_status_defaults_to_interested() {
        let (app, db) = make_test_app().await;
        let (org, _) = create_user(&db, "org@example.com", Role::Organizer).await;
        let (_, token) = create_user(&db, "fan@example.com", Role::User).await;
        let event = create_event(&db, org.id, "E1", "tech", Utc::now()).await;

        let (status, json) = send(
            &app,
            json_request("POST", "/api/bookings", Some(&token), Some(json!({ "eventId": event.id }))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["status"], "INTERESTED");
    }

    #[tokio::test]
    async fn test_booking_unknown_event_and_missing_id() {
        let (app, db) = make_test_app().await;
        let (_, token) = create_user(&db, "fan@example.com", Role::User).await;

        let (status, json) = send(
            &app,
            json_request("POST", "/api/bookings", Some(&token), Some(json!({ "eventId": 999 }))),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Event not found");

        let (status, json) = send(
            &app,
            json_request("POST", "/api/bookings", Some(&token), Some(json!({ "status": "RSVP" }))),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Event ID is required");
    }

    #[tokio::test]
    async fn test_bookings_require_authentication() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, json_request("GET", "/api/bookings/my-bookings", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Authentication required");
    }

    #[tokio::test]
    async fn test_cancel_booking() {
        let (app, db) = make_test_app().await;
        let (org, _) = create_user(&db, "org@example.com", Role::Organizer).await;
        let (_, token) = create_user(&db, "fan@example.com", Role::User).await;
        let event = create_event(&db, org.id, "E1", "tech", Utc::now()).await;
        let uri = format!("/api/bookings/{}", event.id);

        let (status, json) = send(&app, json_request("DELETE", &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({ "error": "Booking not found" }));

        send(
            &app,
            json_request("POST", "/api/bookings", Some(&token), Some(json!({ "eventId": event.id }))),
        )
        .await;

        let (status, json) = send(&app, json_request("DELETE", &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Booking cancelled successfully");

        let remaining = booking::Entity::find()
            .filter(booking::Column::EventId.eq(event.id))
            .count(&db)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }

    #[tokio::test]
    async fn test_my_bookings_include_event_and_organizer() {
        let (app, db) = make_test_app().await;
        let (org, _) = create_user(&db, "org@example.com", Role::Organizer).await;
        let (_, token) = create_user(&db, "fan@example.com", Role::User).await;
        let first = create_event(&db, org.id, "First", "tech", Utc::now()).await;
        let second = create_event(&db, org.id, "Second", "music", Utc::now()).await;

        for event_id in [first.id, second.id] {
            send(
                &app,
                json_request("POST", "/api/bookings", Some(&token), Some(json!({ "eventId": event_id, "status": "RSVP" }))),
            )
            .await;
        }

        let (status, json) = send(&app, json_request("GET", "/api/bookings/my-bookings", Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        let bookings = json["data"].as_array().unwrap();
        assert_eq!(bookings.len(), 2);
        // newest first
        assert_eq!(bookings[0]["event"]["title"], "Second");
        assert_eq!(bookings[0]["event"]["organizer"]["email"], "org@example.com");
        assert!(bookings[0]["event"]["urgency"]["type"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_roster_visible_to_owner_and_admin_only() {
        let (app, db) = make_test_app().await;
        let (org, org_token) = create_user(&db, "org@example.com", Role::Organizer).await;
        let (_, rival_token) = create_user(&db, "rival@example.com", Role::Organizer).await;
        let (_, admin_token) = create_user(&db, "admin@example.com", Role::Admin).await;
        let (fan, fan_token) = create_user(&db, "fan@example.com", Role::User).await;
        let event = create_event(&db, org.id, "E1", "tech", Utc::now()).await;

        send(
            &app,
            json_request("POST", "/api/bookings", Some(&fan_token), Some(json!({ "eventId": event.id }))),
        )
        .await;

        let uri = format!("/api/bookings/event/{}", event.id);

        for token in [&fan_token, &rival_token] {
            let (status, json) = send(&app, json_request("GET", &uri, Some(token), None)).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(json["error"], "Not authorized to view bookings");
        }

        let (status, json) = send(&app, json_request("GET", &uri, Some(&org_token), None)).await;
        assert_eq!(status, StatusCode::OK);
        let roster = json["data"].as_array().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0]["user"], json!({ "id": fan.id, "name": "Test User", "email": "fan@example.com" }));

        let (status, _) = send(&app, json_request("GET", &uri, Some(&admin_token), None)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, json_request("GET", "/api/bookings/event/999", Some(&org_token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stats() {
        let (app, db) = make_test_app().await;
        let (org, _) = create_user(&db, "org@example.com", Role::Organizer).await;
        let (_, token) = create_user(&db, "fan@example.com", Role::User).await;
        let now = Utc::now();
        let past = create_event(&db, org.id, "Past", "tech", now - Duration::days(1)).await;
        let future = create_event(&db, org.id, "Future", "tech", now + Duration::days(1)).await;

        for (event_id, status) in [(past.id, "RSVP"), (future.id, "INTERESTED")] {
            send(
                &app,
                json_request("POST", "/api/bookings", Some(&token), Some(json!({ "eventId": event_id, "status": status }))),
            )
            .await;
        }

        let (status, json) = send(&app, json_request("GET", "/api/bookings/stats", Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["data"],
            json!({ "totalBookings": 2, "upcomingEvents": 1, "rsvpCount": 1, "interestedCount": 1 })
        );
    }
}
