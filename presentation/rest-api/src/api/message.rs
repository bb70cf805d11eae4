use poem_openapi::{Object, payload::Json};

/// Plain acknowledgement returned by mutations without a resource body.
#[derive(Object, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}
