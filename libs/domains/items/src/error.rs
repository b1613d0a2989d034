use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(Uuid),

    #[error("No item matches the filter")]
    NoMatch,

    #[error("Item with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) | ItemError::NoMatch => {
                AppError::NotFound("Item not found".to_string())
            }
            ItemError::DuplicateName(_) => {
                AppError::DuplicateContent("Duplicate item found".to_string())
            }
            ItemError::Validation(errors) => AppError::ValidationError(errors),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
