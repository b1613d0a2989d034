//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "API_ERR_SOMETHING_WENT_WRONG",
        "message": "Something went wrong"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "API_ERR_VALIDATION",
        "message": "Validation failed",
        "details": {
            "brand": [{
                "code": "length",
                "message": "Brand is required",
                "params": {"min": 1, "value": ""}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid UUID",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "API_ERR_INVALID_UUID",
        "message": "Invalid UUID format"
    })
)]
pub struct BadRequestUuidResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Duplicate content",
    content_type = "application/json",
    example = json!({
        "code": 1006,
        "error": "API_ERR_DUPLICATE_CONTENT",
        "message": "Duplicate item found"
    })
)]
pub struct DuplicateContentResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "API_ERR_RESOURCE_NOT_FOUND",
        "message": "Item not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
