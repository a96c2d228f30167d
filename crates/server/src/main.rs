use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    state::AppState,
    utils::init_logger,
};
use tracing::info;
use transit_topup_server::handler::AppRouter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let _logger_guard = init_logger("transit-topup");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url, config.run_migrations)
        .await
        .context("Failed to connect to database")?;

    let state = AppState::new(pool.clone());

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    pool.close().await;

    Ok(())
}
