pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;
pub mod utils;

use axum::{http::Method, middleware as axum_middleware, routing::post, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Session API plus the built frontend. Unknown page paths fall back to the
/// SPA `index.html`.
pub fn build_app(state: AppState) -> Router {
    let dist = state.config.frontend_dist.clone();
    let static_files = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));

    let api_routes = Router::new().route(
        "/api/auth/session",
        post(handlers::session::create_session).delete(handlers::session::clear_session),
    );

    Router::new()
        .merge(api_routes)
        .fallback_service(static_files)
        .layer(axum_middleware::from_fn(middleware::route_guard))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::log_error_responses))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                        .allow_headers(Any)
                        .max_age(Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
