//! OpenAPI documentation configuration

use core_config::server::ServerConfig;
use domain_items::{Category, DEMO_USER_ID};
use utoipa::OpenApi;
use utoipa::openapi::server::Server;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wardrobe API",
        description = "REST API for managing wardrobe items",
        license(name = "MIT")
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Wardrobe item management endpoints")
    )
)]
pub struct ApiDoc;

/// The served document: static paths plus runtime server URL and description.
pub fn document(server: &ServerConfig) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.info.description = Some(description());
    openapi.servers = Some(vec![Server::new(server.public_url.clone())]);
    openapi
}

fn description() -> String {
    let categories = Category::ALL
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "REST API for managing wardrobe items.\n\n\
         **Categories:** {categories}\n\n\
         **Authentication:** not implemented yet. Every item is created for the demo user `{DEMO_USER_ID}`."
    )
}
