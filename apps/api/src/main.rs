mod config;
mod errors;
mod estimate;
mod orders;
mod quotation;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::orders::client::HttpOrderGateway;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PressQuote API v{}", env!("CARGO_PKG_VERSION"));

    let rates = &config.pricing.rates;
    info!(
        "Shop rates: paper {} / plate {} / run {} / markup x{} (reject oversized: {})",
        rates.paper_cost,
        rates.plate_price,
        rates.run_price,
        rates.multiplier,
        config.pricing.reject_oversized
    );

    // Initialize order backend client
    let gateway = HttpOrderGateway::new(&config.order_api_url)?;
    info!("Order backend: {}", gateway.create_url());

    let state = AppState {
        config: config.clone(),
        orders: Arc::new(gateway),
    };

    if config.cors_origins.is_empty() {
        info!("CORS: any origin allowed (CORS_ALLOWED_ORIGINS unset)");
    } else {
        info!("CORS: allowed origins {:?}", config.cors_origins);
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
