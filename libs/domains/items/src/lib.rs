//! Items Domain
//!
//! Wardrobe items: clothing pieces with a brand, category, colour, size and
//! purchase details, kept in a process-local store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints + OpenAPI
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, ownership, not-found handling
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access, unique names (trait + in-memory store)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, filters, pagination
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, InMemoryItemRepository, ItemService};
//!
//! let repository = InMemoryItemRepository::new();
//! let service = ItemService::new(repository);
//!
//! // Mount under /items
//! let router = axum::Router::new().nest("/items", handlers::router(service));
//! ```

mod coerce;
pub mod error;
pub mod handlers;
pub mod models;
pub mod payload;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{
    Category, CreateItem, DEMO_USER_ID, Item, ItemChanges, ItemFilter, ItemListResponse,
    ItemResponse, ListItemsQuery, NewItem, Page, Pagination, PaginationMeta, Session, UpdateItem,
};
pub use payload::{CreateItemBody, UpdateItemBody};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
