//! Contract Test: GET /api/health, GET /api/version

use axum::http::StatusCode;

use crate::support::{app::create_test_app, http::get};

#[tokio::test]
async fn test_health_returns_ok() {
    let (app, _) = create_test_app().await;

    let response = get(&app, "/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
}

#[tokio::test]
async fn test_version_matches_package() {
    let (app, _) = create_test_app().await;

    let response = get(&app, "/api/version").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _) = create_test_app().await;
    assert_eq!(get(&app, "/nope").await.status, StatusCode::NOT_FOUND);
}
