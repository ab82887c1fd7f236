mod error;
mod handlers;
mod models;
mod spotify;

use axum::{Router, routing::get};
use handlers::home_handler;
use handlers::oauth::{callback_handler, login_handler};
use models::{AppConfig, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/auth/spotify/login", get(login_handler))
        .route("/api/auth/spotify/callback", get(callback_handler))
        .with_state(app_state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodify=info")),
        )
        .init();

    let app_config = AppConfig::from_env()?;

    let missing = app_config.missing_credentials();
    if !missing.is_empty() {
        warn!(
            ?missing,
            "Spotify credentials incomplete; auth endpoints will answer 500"
        );
    }

    let bind_addr = app_config.bind_addr;
    let app = build_router(AppState::new(app_config));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
