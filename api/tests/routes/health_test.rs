#[cfg(test)]
mod tests {
    use crate::helpers::{json_request, make_test_app, send};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_check() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, json_request("GET", "/api/health", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["status"], "OK");
        assert_eq!(json["data"]["database"], "up");
    }
}
