//! Users API - REST server

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Build REST router
    let api_routes = api::routes();
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(config.app.clone()));

    info!("Starting Users API on port {}", config.server.port);

    // Run REST server with graceful shutdown
    create_app(app, &config.server).await?;

    info!("Users API shutdown complete");
    Ok(())
}
