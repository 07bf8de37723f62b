mod auth;
mod completion;
mod config;
mod errors;
mod models;
mod recommend;
mod reference;
mod routes;
mod state;
mod weather;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::InMemoryCredentialStore;
use crate::completion::CompletionClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::weather::WeatherClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CropAdvisor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize completion client
    let completion = CompletionClient::new(config.together_api_key.clone());
    info!("Completion client initialized (model: {})", completion::MODEL);

    // Initialize weather client
    let weather = WeatherClient::new(config.openweather_api_key.clone());
    info!("Weather client initialized");

    // Initialize credential store (in-memory SHA-256 by default)
    let credentials = Arc::new(InMemoryCredentialStore::default());

    // Build app state
    let state = AppState {
        completion,
        weather,
        credentials,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
