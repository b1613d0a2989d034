//! Custom extractors for Axum handlers.
//!
//! Each extractor rejects with [`AppError`](crate::errors::AppError), so
//! malformed input is rendered with the same `ErrorResponse` body as domain
//! errors.

pub mod uuid_path;
pub mod validated_json;
pub mod validated_query;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
