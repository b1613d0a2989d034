//! API routes module
//!
//! This module defines all HTTP API routes of the wardrobe service.

pub mod items;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::openapi;
use crate::state::AppState;

/// Create all API routes
/// Note: These are merged at the root by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/items", items::router(state))
}

/// Full application: API routes, docs, middleware and the health endpoint
pub fn app(state: &AppState) -> eyre::Result<Router> {
    let router = create_router(
        routes(state),
        openapi::document(&state.config.server),
        &state.config.cors,
    )?;

    Ok(router.merge(health_router(state.config.app)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::http::StatusCode;
    use core_config::{app_info, cors::CorsConfig, server::ServerConfig};
    use serde_json::{Value, json};
    use test_utils::TestDataBuilder;
    use test_utils::assertions::assert_error_code;
    use test_utils::http::{body_bytes, empty_request, json_body, json_request};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState::new(Config {
            app: app_info!(),
            server: ServerConfig::default(),
            cors: CorsConfig::permissive(),
            environment: Environment::Development,
        })
    }

    #[tokio::test]
    async fn test_items_are_served_at_root() {
        let state = test_state();
        let app = app(&state).unwrap();
        let payload = TestDataBuilder::from_test_name("app_items").item_payload("main");

        let response = app
            .clone()
            .oneshot(json_request("POST", "/items", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(state.items.len().await, 1);

        let response = app
            .oneshot(empty_request("GET", "/items?page=1&count=10"))
            .await
            .unwrap();
        let body: Value = json_body(response).await;
        assert_eq!(body["meta"]["totalRows"], 1);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = app(&test_state())
            .unwrap()
            .oneshot(empty_request("GET", "/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "wardrobe_api");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = app(&test_state())
            .unwrap()
            .oneshot(empty_request("GET", "/api-json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_body(response).await;
        assert_eq!(body["info"]["title"], "Wardrobe API");
        assert!(body["paths"]["/items/{id}"]["patch"].is_object());
        assert_eq!(body["servers"][0]["url"], "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_docs_uis_are_served() {
        let app = app(&test_state()).unwrap();

        for uri in ["/api/", "/scalar"] {
            let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(!body_bytes(response).await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_unknown_route_and_method() {
        let app = app(&test_state()).unwrap();

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/wardrobes"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = json_body(response).await;
        assert_error_code(&body, "API_ERR_RESOURCE_NOT_FOUND");

        let response = app
            .oneshot(json_request("PUT", "/items", &json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
