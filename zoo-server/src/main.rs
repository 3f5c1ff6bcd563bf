use zoo_server::{AppState, Config, Server, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Configuration errors go to stderr; the logger is configured from it
    let config = Config::from_env()?;
    init_logger(config.log_format, config.log_dir.as_deref());

    tracing::info!(database_url = %config.database_url, "Starting zoo-server");

    let state = AppState::initialize(&config).await?;

    Server::new(config, state).run().await?;

    Ok(())
}
