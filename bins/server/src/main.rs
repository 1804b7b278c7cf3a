//! Cambio API Server
//!
//! Main entry point for the Cambio currency conversion service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cambio_api::{AppState, create_router};
use cambio_core::converter::ConversionEngine;
use cambio_core::rates::RateTable;
use cambio_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cambio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Load the rate table; any problem with the rates file aborts startup
    let rates = RateTable::load(&config.rates.file)?;
    info!(
        file = %config.rates.file,
        currencies = ?rates.currencies(),
        "Loaded exchange rates"
    );

    // Create application state
    let state = AppState {
        engine: Arc::new(ConversionEngine::new(rates)),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
