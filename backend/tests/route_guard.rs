mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{app_with, app_with_config, get, temp_dist, MockMinter};
use kencankuy_backend::config::Config;
use tower::ServiceExt;

fn with_session(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, "theme=dark; session=abc123")
        .body(Body::empty())
        .unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn anonymous_visitor_is_sent_to_sign_in_from_protected_pages() {
    for path in [
        "/settings/profile",
        "/admin/curate",
        "/admin/curate.v2",
        "/settings/profile.json",
    ] {
        let response = app_with(MockMinter::new()).oneshot(get(path)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&response), "/auth");
    }
}

#[tokio::test]
async fn signed_in_visitor_skips_the_sign_in_page() {
    let response = app_with(MockMinter::new())
        .oneshot(with_session("/auth"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/app");
}

#[tokio::test]
async fn other_pages_fall_through_to_the_spa() {
    let dist = temp_dist();
    let config = Config {
        frontend_dist: dist.clone(),
        ..Config::default()
    };

    for request in [get("/app/plan/42"), get("/auth"), with_session("/settings/profile")] {
        let response = app_with_config(MockMinter::new(), config.clone())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("kencankuy-spa"));
    }

    let _ = std::fs::remove_dir_all(dist);
}

#[tokio::test]
async fn api_routes_bypass_the_guard() {
    let response = app_with(MockMinter::new())
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/auth/session")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
