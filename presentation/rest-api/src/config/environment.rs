use std::fmt;
use std::str::FromStr;

use super::errors::ConfigurationError;

/// Environment variable naming the deployment mode.
pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// Where the process is deployed. Unset means `Production`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    Development,
    Staging,
    #[default]
    Production,
}

impl DeploymentMode {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Swagger UI and the OpenAPI document are served everywhere except production.
    pub fn exposes_api_docs(self) -> bool {
        self != Self::Production
    }

    /// Name used for the `appsettings.{name}.json` overlay.
    pub fn name(self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Staging => "Staging",
            Self::Production => "Production",
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeploymentMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            _ => Err(ConfigurationError::UnknownEnvironment(s.to_string())),
        }
    }
}
