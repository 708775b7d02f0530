mod api_client;
mod config;
mod indicators;
mod models;
mod routes;
mod services;
mod state;

use axum::{routing::get, Router};
use config::AppConfig;
use state::AppState;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/crypto/indicators", get(routes::indicators::get_indicators))
        .route("/crypto/prices", get(routes::price::get_prices));

    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        "Using {} with a {}-day lookback",
        config.coingecko_base_url,
        config.history_days
    );

    let addr = config.bind_addr;
    let state = AppState::new(config)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
