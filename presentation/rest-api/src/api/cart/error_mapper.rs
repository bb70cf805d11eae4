use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;
use business::domain::errors::RepositoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Quantity must be at least 1",
            ),
            CartError::NotFound | CartError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "NotFound", "Cart item not found")
            }
            CartError::Repository(RepositoryError::ConstraintViolation) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Quantity out of range",
            ),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "Cart store unavailable",
            ),
        };

        (status, ErrorResponse::new(name, message))
    }
}

pub fn invalid_cart_item_id() -> Json<ErrorResponse> {
    ErrorResponse::new("ValidationError", "Invalid cart item ID")
}
