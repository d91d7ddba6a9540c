/// Startup configuration failures. All of them abort the process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error(
        "config.connection_string_missing: MongoDB connection string is not configured. Set the MONGODB_URI environment variable."
    )]
    ConnectionStringMissing,
    #[error("config.invalid_settings_file: {path}: {reason}")]
    InvalidSettingsFile { path: String, reason: String },
    #[error("config.unknown_environment: {0}")]
    UnknownEnvironment(String),
    #[error("config.invalid_port: {key}={value}")]
    InvalidPort { key: &'static str, value: String },
}
