use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!(
        environment = config.environment.as_str(),
        public_url = %config.server.public_url,
        "Starting {} v{}",
        config.app.name,
        config.app.version
    );

    let state = AppState::new(config);

    // API routes, docs, middleware and /health
    let app = api::app(&state)?;

    info!("Swagger UI available at {}/api", state.config.server.public_url);

    let items = state.items.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            let count = items.len().await;
            info!(count, "Shutting down: discarding in-memory items");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Wardrobe API shutdown complete");
    Ok(())
}
