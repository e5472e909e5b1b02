use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Storefront API Entry Point
///
/// Loads configuration, wires the catalog adapter into the storefront
/// session, fetches the catalog once and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, catalog)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.catalog);

    // 5. Initial catalog fetch; a failure is shown to clients, not fatal
    if let Err(err) = container.storefront.load_catalog().await {
        tracing::warn!("Initial catalog load failed: {}", err);
    }

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
