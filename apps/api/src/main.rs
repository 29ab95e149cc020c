mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::build_generator;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::RecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathcast API v{}", env!("CARGO_PKG_VERSION"));

    // The key is only required when a generation is attempted, so a missing
    // one is a warning here and a 500 with `missingApiKey` at request time.
    if config.active_api_key().is_none() {
        warn!(
            "{} is not set; timeline and career generation will fail until it is configured",
            config.active_api_key_var()
        );
    }

    let generator = build_generator(&config)?;
    info!("LLM generator initialized (provider: {})", generator.provider());

    // Volatile: every record lives only as long as this process.
    let store = Arc::new(RecordStore::new());

    let state = AppState { store, generator };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
