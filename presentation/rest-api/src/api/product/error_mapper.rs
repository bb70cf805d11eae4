use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;
use business::domain::shared::pagination::PaginationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product name is required",
            ),
            ProductError::CategoryEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product category is required",
            ),
            ProductError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Price must be zero or more",
            ),
            ProductError::NegativeStock => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Stock must be zero or more",
            ),
            ProductError::Pagination(PaginationError::InvalidPage) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Page must be at least 1",
            ),
            ProductError::Pagination(PaginationError::InvalidLimit) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Limit must be at least 1",
            ),
            ProductError::NotFound | ProductError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "NotFound", "Product not found")
            }
            ProductError::Repository(RepositoryError::ConstraintViolation) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product data out of range",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "Product store unavailable",
            ),
        };

        (status, ErrorResponse::new(name, message))
    }
}

pub fn invalid_product_id() -> Json<ErrorResponse> {
    ErrorResponse::new("ValidationError", "Invalid product ID")
}
