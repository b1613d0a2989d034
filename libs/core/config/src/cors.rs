use crate::{ConfigError, FromEnv};
use std::env;

/// Cross-origin policy read from `CORS_ALLOWED_ORIGIN`.
///
/// The variable holds comma-separated origins. When it is unset every origin
/// is allowed, which matches local development.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

impl CorsConfig {
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_none()
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = env::var("CORS_ALLOWED_ORIGIN") else {
            return Ok(Self::permissive());
        };

        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "at least one origin is required when the variable is set".to_string(),
            });
        }

        Ok(Self {
            allowed_origins: Some(origins),
        })
    }
}
