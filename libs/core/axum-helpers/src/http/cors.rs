use axum::http::{HeaderValue, Method, header};
use core_config::cors::CorsConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates the CORS layer described by `config`.
///
/// Without an origin list every origin is allowed (development). With a list,
/// only those origins are allowed and credentials are permitted.
///
/// # Errors
/// Returns `InvalidInput` if an origin is not a valid header value.
pub fn create_cors_layer(config: &CorsConfig) -> io::Result<CorsLayer> {
    let Some(origins) = &config.allowed_origins else {
        return Ok(CorsLayer::permissive());
    };

    let allowed_origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_when_no_origins() {
        assert!(create_cors_layer(&CorsConfig::permissive()).is_ok());
    }

    #[test]
    fn test_rejects_invalid_origin() {
        let config = CorsConfig {
            allowed_origins: Some(vec!["http://bad\norigin".to_string()]),
        };
        let err = create_cors_layer(&config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
