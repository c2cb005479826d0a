use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kencankuy_backend::{
    build_app,
    config::{mask_secret, Config},
    services::identity::FirebaseSessionMinter,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kencankuy_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    match &config.firebase {
        Some(creds) => tracing::info!(
            project_id = %creds.project_id,
            client_email = %creds.client_email,
            private_key = %mask_secret(&creds.private_key),
            "Loaded identity provider credentials"
        ),
        None => tracing::warn!(
            "FIREBASE_PROJECT_ID / FIREBASE_CLIENT_EMAIL / FIREBASE_PRIVATE_KEY missing; session minting will fail"
        ),
    }
    tracing::info!(
        bind_addr = %config.bind_addr,
        frontend_dist = %config.frontend_dist.display(),
        session_cookie_secure = config.session_cookie_secure,
        "Loaded configuration from environment/.env"
    );

    let minter = Arc::new(FirebaseSessionMinter::new(config.firebase.clone()));
    let addr = config.bind_addr;
    let app = build_app(AppState::new(config, minter));

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
