use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AuthError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "Name is required"),
            AuthError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Invalid email address",
            ),
            AuthError::PasswordTooShort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Password must be at least 6 characters",
            ),
            AuthError::CredentialsRequired => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Email and password are required",
            ),
            AuthError::EmailTaken => (
                StatusCode::CONFLICT,
                "Conflict",
                "Email already registered",
            ),
            AuthError::InvalidCredentials | AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Unauthenticated",
                "Invalid credentials",
            ),
            AuthError::TokenIssue | AuthError::Hashing | AuthError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "Authentication unavailable",
            ),
        };

        (status, ErrorResponse::new(name, message))
    }
}
