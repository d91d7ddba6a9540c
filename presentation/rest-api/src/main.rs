use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::dependency_injection::{DependencyContainer, ServiceRegistry};
use setup::server::Server;

/// REST API entry point
///
/// Startup is strictly sequential and fails fast: configuration, then the database
/// handle, then the service registry, then the listener. Nothing is served until
/// every service exists.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env before anything reads the environment
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(
        environment = %config.environment,
        api_docs = config.environment.exposes_api_docs(),
        "Configuration loaded"
    );

    // 4. Resolve the connection string and build the database handle
    let connection = database_config::resolve_from_environment(config.environment)?;
    let database = database_config::init_database(&connection).await?;

    // 5. Wire services and controllers
    let registry = ServiceRegistry::new(&database);
    let container = DependencyContainer::new(&registry);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
