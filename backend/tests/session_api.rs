mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{app_with, app_with_config, body_json, MockMinter};
use kencankuy_backend::{config::Config, services::identity::MintError};
use mockall::predicate::eq;
use serde_json::json;
use tower::ServiceExt;

fn session_request(method: Method, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri("/api/auth/session");
    if let Some(value) = bearer {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

fn set_cookie(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("set-cookie header")
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn post_with_bearer_sets_http_only_secure_session_cookie() {
    let mut minter = MockMinter::new();
    minter
        .expect_create_session_cookie()
        .with(eq("id-token-1"), eq(std::time::Duration::from_secs(432_000)))
        .times(1)
        .returning(|_, _| Ok("minted-session".to_string()));

    let response = app_with(minter)
        .oneshot(session_request(Method::POST, Some("Bearer id-token-1")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response);
    assert_eq!(
        cookie,
        "session=minted-session; Path=/; Max-Age=432000; HttpOnly; Secure; SameSite=Lax"
    );
    assert_eq!(body_json(response).await, json!({ "status": "success" }));
}

#[tokio::test]
async fn post_without_bearer_is_unauthorized() {
    for header_value in [None, Some("Basic abc"), Some("Bearer ")] {
        let mut minter = MockMinter::new();
        minter.expect_create_session_cookie().never();
        let response = app_with(minter)
            .oneshot(session_request(Method::POST, header_value))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(body_json(response).await, json!({ "message": "Unauthorized" }));
    }
}

#[tokio::test]
async fn minting_failure_is_a_generic_500() {
    let mut minter = MockMinter::new();
    minter.expect_create_session_cookie().returning(|_, _| {
        Err(MintError::Rejected {
            status: 400,
            message: "INVALID_ID_TOKEN".into(),
        })
    });

    let response = app_with(minter)
        .oneshot(session_request(Method::POST, Some("Bearer stale")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_json(response).await, json!({ "message": "Internal Server Error" }));
}

#[tokio::test]
async fn delete_expires_the_session_cookie() {
    let mut minter = MockMinter::new();
    minter.expect_create_session_cookie().never();

    let response = app_with(minter)
        .oneshot(session_request(Method::DELETE, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response);
    assert_eq!(cookie, "session=; Path=/; Max-Age=0");
    assert_eq!(body_json(response).await, json!({ "status": "success" }));
}

#[tokio::test]
async fn secure_attribute_follows_config() {
    let mut minter = MockMinter::new();
    minter
        .expect_create_session_cookie()
        .returning(|_, _| Ok("local".to_string()));
    let config = Config {
        session_cookie_secure: false,
        ..Config::default()
    };

    let response = app_with_config(minter, config)
        .oneshot(session_request(Method::POST, Some("Bearer t")))
        .await
        .unwrap();

    let cookie = set_cookie(&response);
    assert!(cookie.contains("HttpOnly"));
    assert!(!cookie.contains("Secure"));
}
