#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use kencankuy_backend::{
    build_app,
    config::Config,
    services::identity::{MintError, SessionMinter},
    state::AppState,
};
use std::{path::PathBuf, sync::Arc, time::Duration};

mockall::mock! {
    pub Minter {}

    #[async_trait]
    impl SessionMinter for Minter {
        async fn create_session_cookie(
            &self,
            id_token: &str,
            expires_in: Duration,
        ) -> Result<String, MintError>;
    }
}

pub fn app_with(minter: MockMinter) -> Router {
    app_with_config(minter, Config::default())
}

pub fn app_with_config(minter: MockMinter, config: Config) -> Router {
    build_app(AppState::new(config, Arc::new(minter)))
}

/// A throwaway dist directory holding a recognisable `index.html`.
pub fn temp_dist() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kencankuy-dist-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create dist dir");
    std::fs::write(dir.join("index.html"), "<html><body>kencankuy-spa</body></html>")
        .expect("write index.html");
    dir
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
