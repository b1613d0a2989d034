use axum::{
    Json,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    let code = ErrorCode::NotFound;
    let body = Json(ErrorResponse::new(
        code,
        "The requested resource was not found",
    ));

    (code.status(), body).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    let code = ErrorCode::MethodNotAllowed;
    let body = Json(ErrorResponse::new(code, code.default_message()));

    (code.status(), body).into_response()
}
