//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "API_ERR_RESOURCE_NOT_FOUND")
//! - Integer code for logging and monitoring (e.g., 1004)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "API_ERR_RESOURCE_NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! assert_eq!(code.default_message(), "Resource not found");
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ErrorCode {
    /// Request body or query failed schema validation
    #[serde(rename = "API_ERR_VALIDATION")]
    ValidationError,

    /// Invalid UUID format in a path parameter
    #[serde(rename = "API_ERR_INVALID_UUID")]
    InvalidUuid,

    /// Request could not be parsed (malformed JSON, wrong types, bad query string)
    #[serde(rename = "API_ERR_BAD_REQUEST")]
    BadRequest,

    /// Requested resource was not found
    #[serde(rename = "API_ERR_RESOURCE_NOT_FOUND")]
    NotFound,

    /// An unexpected internal server error occurred
    #[serde(rename = "API_ERR_SOMETHING_WENT_WRONG")]
    InternalError,

    /// A resource with the same unique content already exists
    #[serde(rename = "API_ERR_DUPLICATE_CONTENT")]
    DuplicateContent,

    /// HTTP method not supported by the route
    #[serde(rename = "API_ERR_METHOD_NOT_ALLOWED")]
    MethodNotAllowed,
}

impl ErrorCode {
    /// String identifier clients can match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "API_ERR_VALIDATION",
            Self::InvalidUuid => "API_ERR_INVALID_UUID",
            Self::BadRequest => "API_ERR_BAD_REQUEST",
            Self::NotFound => "API_ERR_RESOURCE_NOT_FOUND",
            Self::InternalError => "API_ERR_SOMETHING_WENT_WRONG",
            Self::DuplicateContent => "API_ERR_DUPLICATE_CONTENT",
            Self::MethodNotAllowed => "API_ERR_METHOD_NOT_ALLOWED",
        }
    }

    /// Integer code used in structured logs.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::BadRequest => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::DuplicateContent => 1006,
            Self::MethodNotAllowed => 1007,
        }
    }

    /// HTTP status this code is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationError
            | Self::InvalidUuid
            | Self::BadRequest
            | Self::DuplicateContent => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Default user-facing message.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Validation failed",
            Self::InvalidUuid => "Invalid UUID format",
            Self::BadRequest => "Failed to parse request",
            Self::NotFound => "Resource not found",
            Self::InternalError => "Something went wrong",
            Self::DuplicateContent => "Duplicate content found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
