//! Contest Gateway - Application Entry Point
//!
//! This is the main entry point for the Contest Gateway server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contest_gateway::{
    config::{Config, LogFormat},
    create_router,
    state::AppState,
    upstream::HttpUpstream,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Contest Gateway...");
    tracing::info!(
        environment = config.environment.name(),
        auth_api = %config.upstream.auth_api_url,
        contest_api = %config.upstream.contest_api_url,
        "Upstream configuration loaded"
    );
    if !config.environment.is_production() {
        tracing::warn!("Development fallback enabled for contest creation");
    }

    // Shared upstream HTTP client
    let client = HttpUpstream::new(config.upstream.timeout)?;

    // Create application state
    let state = AppState::new(Arc::new(client), config.clone());

    // Build the router
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start the server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
