use super::environment::DeploymentMode;
use super::errors::ConfigurationError;
use super::server_config::ServerConfig;

pub struct AppConfig {
    pub server: ServerConfig,
    pub environment: DeploymentMode,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            environment: DeploymentMode::from_env()?,
        })
    }
}
