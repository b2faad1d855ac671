use anyhow::Context;
use tracing::{Level, info};

use server::config::AppConfig;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let (host, port) = (config.server.host.clone(), config.server.port);

    info!(
        store = ?config.store.backend,
        media = ?config.media.provider,
        "Starting wedding gallery server"
    );

    let state = AppState::from_config(config).await?;
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .context("Failed to bind server address")?;
    info!("Server running at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
