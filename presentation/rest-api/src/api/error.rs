use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};

/// JSON body of every failed request.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(name: &str, error: &str) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            error: error.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Renders errors raised by the framework itself (missing bearer, body or
/// parameter parse failures, unknown routes) in the same JSON shape.
pub async fn render_framework_error(err: poem::Error) -> Response {
    let status = err.status();
    let (name, message) = match status {
        StatusCode::UNAUTHORIZED => ("Unauthenticated", "User not authenticated"),
        StatusCode::NOT_FOUND => ("NotFound", "Route not found"),
        StatusCode::METHOD_NOT_ALLOWED => ("MethodNotAllowed", "Method not allowed"),
        s if s.is_client_error() => ("ValidationError", "Invalid request"),
        _ => ("InternalError", "Internal server error"),
    };

    if status.is_server_error() {
        tracing::error!(error = %err, "Unhandled request failure");
    } else {
        tracing::debug!(error = %err, status = status.as_u16(), "Request rejected");
    }

    ErrorResponse::new(name, message)
        .with_status(status)
        .into_response()
}
