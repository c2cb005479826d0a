mod common;

use axum::{body::Body, http::Request};
use common::{app_with, MockMinter};
use tower::ServiceExt;
use uuid::Uuid;

fn delete_session() -> axum::http::request::Builder {
    Request::builder().method("DELETE").uri("/api/auth/session")
}

#[tokio::test]
async fn request_id_is_generated_when_missing() {
    let response = app_with(MockMinter::new())
        .oneshot(delete_session().body(Body::empty()).unwrap())
        .await
        .unwrap();

    let id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header");
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn caller_request_id_is_echoed() {
    let response = app_with(MockMinter::new())
        .oneshot(
            delete_session()
                .header("x-request-id", "client-req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "client-req-123");
}
