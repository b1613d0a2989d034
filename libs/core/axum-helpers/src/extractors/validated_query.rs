//! Query-string extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor with automatic validation.
///
/// Values are coerced from their string form by `serde`; anything that does not
/// parse rejects with `API_ERR_BAD_REQUEST`, and range/length violations reject
/// with `API_ERR_VALIDATION`.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state).await?;
        data.validate()?;
        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Paging {
        #[serde(default = "one")]
        #[validate(range(min = 1))]
        page: u32,
    }

    fn one() -> u32 {
        1
    }

    async fn extract(uri: &str) -> Result<ValidatedQuery<Paging>, AppError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ValidatedQuery::<Paging>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_coerces_and_defaults() {
        let ValidatedQuery(paging) = extract("/items?page=3").await.unwrap();
        assert_eq!(paging.page, 3);

        let ValidatedQuery(paging) = extract("/items").await.unwrap();
        assert_eq!(paging.page, 1);
    }

    #[tokio::test]
    async fn test_rejects_out_of_range_and_garbage() {
        let err = extract("/items?page=0").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = extract("/items?page=abc").await.unwrap_err();
        assert!(matches!(err, AppError::QueryExtractorRejection(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
