use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use serde::Serialize;
use std::time::Duration;

use crate::{
    error::AppError,
    state::AppState,
    utils::cookies::{
        build_clear_cookie, build_session_cookie, SESSION_COOKIE_NAME, SESSION_COOKIE_PATH,
    },
};

/// Five days, matching the identity provider's session lifetime.
pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 5);

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    fn success() -> Json<Self> {
        Json(Self { status: "success" })
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub async fn create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let id_token =
        bearer_token(&headers).ok_or_else(|| AppError::Unauthorized("Unauthorized".into()))?;

    let session = state
        .minter
        .create_session_cookie(id_token, SESSION_TTL)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "failed to mint session cookie");
            AppError::from(err)
        })?;

    let cookie = build_session_cookie(
        SESSION_COOKIE_NAME,
        &session,
        SESSION_TTL,
        SESSION_COOKIE_PATH,
        state.config.cookie_options(),
    );
    tracing::info!("session cookie issued");
    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        StatusResponse::success(),
    ))
}

pub async fn clear_session() -> impl IntoResponse {
    (
        AppendHeaders([(
            header::SET_COOKIE,
            build_clear_cookie(SESSION_COOKIE_NAME, SESSION_COOKIE_PATH),
        )]),
        StatusResponse::success(),
    )
}
