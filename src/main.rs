mod backend;
mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let backend = backend::BackendClient::from_config(&config).expect("backend client init failed");
    tracing::info!(base_url = backend.base_url(), "backend client initialized");

    let state = state::AppState::new(Arc::new(backend));

    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "account loader listening");
    axum::serve(listener, app).await.expect("server failed");
}
