use mongodb::{Client, Database, options::ClientOptions};
use std::time::Duration;
use thiserror::Error;

/// Logical database every service works in. Not configurable.
pub const DATABASE_NAME: &str = "commbank";

const APP_NAME: &str = "commbank-server";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error: {0}")]
    ConnectionError(String),
}

/// Configuration for the database client
pub struct DatabaseConfig {
    pub connection_string: String,
    pub database_name: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration bound to [`DATABASE_NAME`]
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            database_name: DATABASE_NAME.to_string(),
            max_pool_size: 10,
            connect_timeout: Duration::from_secs(30),
        }
    }
}

/// Builds a MongoDB client and selects the configured database.
///
/// The driver connects lazily: this validates the connection string (including
/// SRV resolution for `mongodb+srv://` URIs) but does not wait for a server.
pub async fn create_mongo_database(config: &DatabaseConfig) -> Result<Database, DatabaseError> {
    let mut options = ClientOptions::parse(&config.connection_string)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;
    options.app_name = Some(APP_NAME.to_string());
    options.max_pool_size = Some(config.max_pool_size);
    options.connect_timeout = Some(config.connect_timeout);

    let client =
        Client::with_options(options).map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    Ok(client.database(&config.database_name))
}
