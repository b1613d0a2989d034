//! UUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::{Uuid, fmt::Hyphenated};

/// Extractor for UUID path parameters.
///
/// Only the hyphenated form (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, any case)
/// is accepted. Anything else rejects with `API_ERR_INVALID_UUID` (400).
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::UuidPath;
///
/// async fn get_item(UuidPath(id): UuidPath) -> String {
///     format!("Item ID: {}", id)
/// }
///
/// let app = Router::new().route("/items/{id}", get(get_item));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        // `try_parse` also takes the simple, braced and URN forms
        let parsed = Uuid::try_parse(&raw)
            .ok()
            .filter(|_| raw.len() == Hyphenated::LENGTH);

        parsed.map(UuidPath).ok_or(AppError::InvalidUuid(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    async fn status_for(segment: &str) -> StatusCode {
        let app = Router::new().route(
            "/items/{id}",
            get(|UuidPath(id): UuidPath| async move { id.to_string() }),
        );

        app.oneshot(
            Request::get(format!("/items/{segment}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn test_accepts_hyphenated_form() {
        assert_eq!(
            status_for("550e8400-e29b-41d4-a716-446655440000").await,
            StatusCode::OK
        );
        assert_eq!(
            status_for("550E8400-E29B-41D4-A716-446655440000").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_rejects_other_uuid_forms() {
        for segment in [
            "550e8400e29b41d4a716446655440000",
            "%7B550e8400-e29b-41d4-a716-446655440000%7D",
            "urn:uuid:550e8400-e29b-41d4-a716-446655440000",
            "not-a-uuid",
        ] {
            assert_eq!(status_for(segment).await, StatusCode::BAD_REQUEST, "{segment}");
        }
    }
}
