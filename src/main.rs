use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;

use user_api::api::create_router;
use user_api::config::AppConfig;
use user_api::create_app_state;
use user_api::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging);

    let state = create_app_state(&config).await?;
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind server address")?;

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
