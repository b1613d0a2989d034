use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, DuplicateContentResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{
    Category, CreateItem, Item, ItemListResponse, ItemResponse, ListItemsQuery, PaginationMeta,
    Session, UpdateItem,
};
use crate::payload::{CreateItemBody, UpdateItemBody};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(
            Item,
            Category,
            CreateItem,
            UpdateItem,
            PaginationMeta,
            ItemResponse,
            ItemListResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            DuplicateContentResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Wardrobe item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .with_state(shared_service)
}

/// List items with pagination and optional exact-match filters
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "List of items retrieved successfully", body = ItemListResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedQuery(query): ValidatedQuery<ListItemsQuery>,
) -> ItemResult<Json<ItemListResponse>> {
    let page = service.list_items(query).await?;
    Ok(Json(page.into()))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = ItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(body): ValidatedJson<CreateItemBody>,
) -> ItemResult<impl IntoResponse> {
    let input = CreateItem::try_from(body)?;
    // No authentication yet: every item belongs to the demo user
    let item = service.create_item(input, &Session::demo()).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// Get a single item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item unique identifier")
    ),
    responses(
        (status = 200, description = "Item retrieved successfully", body = ItemResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.get_item(id).await?;
    Ok(Json(item.into()))
}

/// Update an existing item
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item unique identifier")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = ItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(body): ValidatedJson<UpdateItemBody>,
) -> ItemResult<Json<ItemResponse>> {
    let input = UpdateItem::try_from(body)?;
    let item = service.update_item(id, input).await?;
    Ok(Json(item.into()))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item unique identifier")
    ),
    responses(
        (status = 204, description = "Item deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<impl IntoResponse> {
    service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
