use crate::{ConfigError, FromEnv, env_first_or_default, env_or_default};
use std::net::Ipv4Addr;

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Externally reachable base URL, advertised in the OpenAPI document
    pub public_url: String,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        let public_url = default_public_url(port);
        Self {
            host,
            port,
            public_url,
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_public_url(port: u16) -> String {
    format!("http://localhost:{}", port)
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST (or APP_HOST): defaults to 0.0.0.0
    /// - PORT (or APP_PORT): defaults to 8080
    /// - APP_URL: defaults to http://localhost:{PORT}
    fn from_env() -> Result<Self, ConfigError> {
        let host =
            env_first_or_default(&["HOST", "APP_HOST"], &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_first_or_default(&["PORT", "APP_PORT"], "8080")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            })?;
        let public_url = env_or_default("APP_URL", &default_public_url(port))
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            host,
            port,
            public_url,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), 8080)
    }
}
