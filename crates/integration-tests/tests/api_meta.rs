use axum::http::StatusCode;
use integration_tests::http::{TestApp, SERVICE_NAME, TITLE};

#[tokio::test]
async fn health_reports_service_and_timestamp() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], SERVICE_NAME);
    let stamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok(), "{stamp}");
}

#[tokio::test]
async fn root_lists_the_endpoints() {
    let app = TestApp::new();

    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], TITLE);
    assert_eq!(body["version"], "0.1.0");
    assert_eq!(body["endpoints"]["health"], "/health");
    assert_eq!(body["endpoints"]["users"].as_array().unwrap().len(), 5);
    assert_eq!(body["endpoints"]["posts"][0], "GET /posts");
}

#[tokio::test]
async fn unknown_routes_get_a_json_404() {
    let app = TestApp::new();

    let (status, body) = app.get("/comments").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route not found");
}
