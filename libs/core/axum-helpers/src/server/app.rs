use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::{cors::CorsConfig, server::ServerConfig};
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::openapi::OpenApi;
use utoipa_scalar::{Scalar, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Path of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/api";
/// Path of the raw OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-json";
/// Path of the Scalar API reference.
pub const SCALAR_PATH: &str = "/scalar";

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI at `/api`, JSON at `/api-json`, Scalar at `/scalar`)
/// - API routes merged at the root (`/items`, ...)
/// - Common middleware (tracing, security headers, CORS, compression)
/// - 404 and 405 fallbacks rendered as `ErrorResponse`
///
/// Domain routers should apply their own state before being passed in.
///
/// # Errors
/// Returns `InvalidInput` if the CORS origin list contains an invalid value.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
/// use core_config::cors::CorsConfig;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().nest("/items", items_router);
/// let router = create_router(api_routes, ApiDoc::openapi(), &CorsConfig::permissive())?;
/// ```
pub fn create_router(apis: Router, openapi: OpenApi, cors: &CorsConfig) -> io::Result<Router> {
    let cors_layer = create_cors_layer(cors)?;

    if cors.is_permissive() {
        info!("CORS configured permissively (CORS_ALLOWED_ORIGIN not set)");
    } else {
        info!(origins = ?cors.allowed_origins, "CORS configured with allowed origins");
    }

    let router = Router::new()
        .merge(Scalar::with_url(SCALAR_PATH, openapi.clone()))
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, openapi))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Production-ready server with coordinated shutdown and cleanup.
///
/// # Arguments
/// * `router` - The configured Axum router
/// * `server_config` - Server configuration
/// * `shutdown_timeout` - Maximum time to wait for cleanup after the signal
/// * `cleanup` - Async cleanup run once shutdown begins
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();
    let signal_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    tokio::spawn(async move {
        signal_handle.wait_for_signal().await;
    });

    let cleanup_rx = coordinator.subscribe();
    let cleanup_handle = tokio::spawn(async move {
        let mut cleanup_rx = cleanup_rx;
        let _ = cleanup_rx.recv().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Make sure cleanup runs even if the server stopped for another reason
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        let openapi = utoipa::openapi::OpenApiBuilder::new().build();
        create_router(apis, openapi, &CorsConfig::permissive()).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_route_returns_error_response() {
        let response = test_router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "API_ERR_RESOURCE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_wrong_method_returns_405() {
        let response = test_router()
            .oneshot(Request::delete("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_security_headers_and_openapi_json() {
        let response = test_router()
            .oneshot(Request::get(OPENAPI_JSON_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
    }
}
