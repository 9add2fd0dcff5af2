use anyhow::Result;
use tracing::info;

use language_service::config::Config;
use language_service::language::{LanguageManager, LanguageStore};
use language_service::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("language_service=info".parse()?),
        )
        .init();

    info!("Starting language service");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Wire the layers explicitly: store -> manager -> router
    let store = LanguageStore::seeded();
    let manager = LanguageManager::new(store);
    let app = server::router(manager);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
