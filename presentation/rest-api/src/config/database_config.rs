use std::fmt;
use std::path::Path;

use mongodb::Database;
use persistence::db::{DatabaseConfig, DatabaseError, create_mongo_database};

use super::environment::DeploymentMode;
use super::errors::ConfigurationError;
use super::settings_file::read_connection_string;

/// Highest-priority source for the connection string.
pub const MONGODB_URI_VAR: &str = "MONGODB_URI";
/// Entry looked up under `ConnectionStrings` in the JSON settings files.
pub const CONNECTION_STRING_NAME: &str = "CommBank";
/// .NET-style configuration key, `ConnectionStrings:CommBank` with `__` as separator.
pub const CONNECTION_STRING_VAR: &str = "ConnectionStrings__CommBank";
pub const SECRETS_FILE: &str = "Secrets.json";
pub const SETTINGS_FILE: &str = "appsettings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    EnvironmentVariable,
    SecretsFile,
    ConfigurationEnvironment,
    EnvironmentSettingsFile,
    SettingsFile,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfigSource::EnvironmentVariable => "environment variable MONGODB_URI",
            ConfigSource::SecretsFile => "Secrets.json",
            ConfigSource::ConfigurationEnvironment => "environment variable ConnectionStrings__CommBank",
            ConfigSource::EnvironmentSettingsFile => "environment settings file",
            ConfigSource::SettingsFile => "appsettings.json",
        };
        f.write_str(label)
    }
}

/// One lookup in the configuration cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTier {
    pub source: ConfigSource,
    pub value: Option<String>,
}

impl ConfigTier {
    pub fn new(source: ConfigSource, value: Option<String>) -> Self {
        Self { source, value }
    }
}

/// The winning connection string and where it came from.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConnectionString {
    pub source: ConfigSource,
    pub value: String,
}

// The URI may embed credentials.
impl fmt::Debug for ResolvedConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConnectionString")
            .field("source", &self.source)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Picks the first tier holding a non-blank value, in the order given.
pub fn resolve_connection_string(
    tiers: impl IntoIterator<Item = ConfigTier>,
) -> Result<ResolvedConnectionString, ConfigurationError> {
    tiers
        .into_iter()
        .find_map(|tier| {
            let value = tier.value?.trim().to_string();
            (!value.is_empty()).then_some(ResolvedConnectionString {
                source: tier.source,
                value,
            })
        })
        .ok_or(ConfigurationError::ConnectionStringMissing)
}

/// Connection-string values taken from the process environment.
#[derive(Clone, Default)]
pub struct EnvironmentValues {
    /// `MONGODB_URI`
    pub mongodb_uri: Option<String>,
    /// `ConnectionStrings__CommBank`
    pub connection_string: Option<String>,
}

impl EnvironmentValues {
    pub fn from_process() -> Self {
        Self {
            mongodb_uri: std::env::var(MONGODB_URI_VAR).ok(),
            connection_string: std::env::var(CONNECTION_STRING_VAR).ok(),
        }
    }
}

/// Builds the cascade: `MONGODB_URI`, `Secrets.json`, `ConnectionStrings__CommBank`,
/// `appsettings.{mode}.json`, `appsettings.json`. Files are read from `base_dir`.
pub fn collect_tiers(
    env: EnvironmentValues,
    base_dir: &Path,
    mode: DeploymentMode,
) -> Result<Vec<ConfigTier>, ConfigurationError> {
    let environment_file = format!("appsettings.{}.json", mode.name());

    Ok(vec![
        ConfigTier::new(ConfigSource::EnvironmentVariable, env.mongodb_uri),
        ConfigTier::new(
            ConfigSource::SecretsFile,
            read_connection_string(&base_dir.join(SECRETS_FILE), CONNECTION_STRING_NAME)?,
        ),
        ConfigTier::new(ConfigSource::ConfigurationEnvironment, env.connection_string),
        ConfigTier::new(
            ConfigSource::EnvironmentSettingsFile,
            read_connection_string(&base_dir.join(environment_file), CONNECTION_STRING_NAME)?,
        ),
        ConfigTier::new(
            ConfigSource::SettingsFile,
            read_connection_string(&base_dir.join(SETTINGS_FILE), CONNECTION_STRING_NAME)?,
        ),
    ])
}

/// Resolves the connection string from the process environment and the working directory.
///
/// # Errors
/// Returns [`ConfigurationError::ConnectionStringMissing`] when no source has a value,
/// or [`ConfigurationError::InvalidSettingsFile`] when a settings file is unreadable.
pub fn resolve_from_environment(
    mode: DeploymentMode,
) -> Result<ResolvedConnectionString, ConfigurationError> {
    let base_dir = std::env::current_dir().map_err(|e| ConfigurationError::InvalidSettingsFile {
        path: ".".to_string(),
        reason: e.to_string(),
    })?;
    let tiers = collect_tiers(EnvironmentValues::from_process(), &base_dir, mode)?;
    let resolved = resolve_connection_string(tiers)?;
    tracing::info!(source = %resolved.source, "Resolved MongoDB connection string");
    Ok(resolved)
}

/// Initialize the database handle from the resolved connection string
///
/// # Errors
/// Returns error if the driver rejects the connection string
pub async fn init_database(connection: &ResolvedConnectionString) -> Result<Database, DatabaseError> {
    let config = DatabaseConfig::new(connection.value.clone());
    let database = create_mongo_database(&config).await?;
    tracing::info!(database = database.name(), "MongoDB client ready");
    Ok(database)
}
