use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::utils::cookies::{extract_cookie_value, SESSION_COOKIE_NAME};

pub const SIGN_IN_PATH: &str = "/auth";
pub const APP_PATH: &str = "/app";
const PROTECTED_PREFIXES: [&str; 2] = ["/settings", "/admin"];

const PUBLIC_ASSETS_PREFIX: &str = "/public/";

/// API routes, `/public/` assets and the top-level build output (wasm
/// bundle, loader script, `config.json`, favicon) skip page-level redirects.
/// Dotted paths below a page prefix are still pages.
pub fn is_page_route(path: &str) -> bool {
    if path == "/api" || path.starts_with("/api/") || path.starts_with(PUBLIC_ASSETS_PREFIX) {
        return false;
    }
    !is_root_file(path)
}

fn is_root_file(path: &str) -> bool {
    match path.strip_prefix('/') {
        Some(name) => !name.contains('/') && name.contains('.'),
        None => false,
    }
}

pub fn redirect_for(path: &str, has_session: bool) -> Option<&'static str> {
    if has_session {
        (path == SIGN_IN_PATH).then_some(APP_PATH)
    } else {
        PROTECTED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
            .then_some(SIGN_IN_PATH)
    }
}

fn has_session_cookie(req: &Request) -> bool {
    req.headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|raw| {
            extract_cookie_value(raw, SESSION_COOKIE_NAME)
                .map(|v| !v.is_empty())
                .unwrap_or(false)
        })
}

pub async fn route_guard(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    if !is_page_route(&path) {
        return next.run(req).await;
    }
    match redirect_for(&path, has_session_cookie(&req)) {
        Some(target) => {
            tracing::debug!(from = %path, to = target, "route guard redirect");
            Redirect::temporary(target).into_response()
        }
        None => next.run(req).await,
    }
}
