pub mod cors;
pub mod server;
pub mod tracing;

use std::env;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment, read from `APP_ENV` (falling back to `NODE_ENV`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env_first_or_default(&["APP_ENV", "NODE_ENV"], "development");

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Name and version of the running binary, reported by `/health`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Builds an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load and parse environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Value of the first variable in `keys` that is set, else `default`
pub fn env_first_or_default(keys: &[&str], default: &str) -> String {
    keys.iter()
        .find_map(|key| env::var(key).ok())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_vars_unset(["APP_ENV", "NODE_ENV"], || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        temp_env::with_var("APP_ENV", Some("PRODUCTION"), || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Production);
            assert_eq!(env.as_str(), "production");
        });
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        // Anything other than "production" is development
        temp_env::with_var("APP_ENV", Some("test"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_app_info_macro_uses_package_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert!(!info.version.is_empty());
    }

    #[test]
    fn test_env_or_default_without_value() {
        temp_env::with_var_unset("WARDROBE_MISSING_VAR", || {
            let result = env_or_default("WARDROBE_MISSING_VAR", "default_value");
            assert_eq!(result, "default_value");
        });
    }

    #[test]
    fn test_environment_falls_back_to_node_env() {
        temp_env::with_vars([("APP_ENV", None), ("NODE_ENV", Some("production"))], || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });

        temp_env::with_vars(
            [("APP_ENV", Some("development")), ("NODE_ENV", Some("production"))],
            || {
                assert_eq!(Environment::from_env(), Environment::Development);
            },
        );
    }

    #[test]
    fn test_env_first_or_default_prefers_earlier_keys() {
        temp_env::with_vars(
            [("WARDROBE_FIRST", Some("a")), ("WARDROBE_SECOND", Some("b"))],
            || {
                let value = env_first_or_default(&["WARDROBE_FIRST", "WARDROBE_SECOND"], "c");
                assert_eq!(value, "a");
            },
        );

        temp_env::with_vars(
            [("WARDROBE_FIRST", None), ("WARDROBE_SECOND", Some("b"))],
            || {
                let value = env_first_or_default(&["WARDROBE_FIRST", "WARDROBE_SECOND"], "c");
                assert_eq!(value, "b");
            },
        );

        temp_env::with_vars_unset(["WARDROBE_FIRST", "WARDROBE_SECOND"], || {
            assert_eq!(env_first_or_default(&["WARDROBE_FIRST", "WARDROBE_SECOND"], "c"), "c");
        });
    }
}
