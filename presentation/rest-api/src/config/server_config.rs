use std::env;

use super::errors::ConfigurationError;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
    /// Public HTTPS port used for redirects. `None` disables redirection.
    pub https_port: Option<u16>,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    /// - HTTPS_PORT: Port plain-HTTP requests are redirected to (optional)
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("SERVICE_PORT") {
            Ok(value) => parse_port("SERVICE_PORT", &value)?,
            Err(_) => 8080,
        };
        let https_port = env::var("HTTPS_PORT")
            .ok()
            .map(|value| parse_port("HTTPS_PORT", &value))
            .transpose()?;

        Ok(Self {
            ip,
            port,
            https_port,
        })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_port(key: &'static str, value: &str) -> Result<u16, ConfigurationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigurationError::InvalidPort {
            key,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: 8080,
            https_port: None,
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "127.0.0.1:8080");
    }

    #[test]
    fn should_parse_port_with_surrounding_whitespace() {
        assert_eq!(parse_port("SERVICE_PORT", " 5001 ").unwrap(), 5001);
    }

    #[test]
    fn should_reject_out_of_range_port() {
        let result = parse_port("HTTPS_PORT", "70000");

        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidPort { key: "HTTPS_PORT", .. })
        ));
    }
}
