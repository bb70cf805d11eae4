use std::sync::Arc;

use poem::Request;
use poem_openapi::{SecurityScheme, auth::Bearer, payload::Json};

use business::domain::auth::gate::AccessGate;
use business::domain::auth::model::AuthContext;
use business::domain::shared::value_objects::UserId;

use crate::api::error::ErrorResponse;

/// Access gate shared by all requests; attached to the app with `.data(..)`.
pub type SharedAccessGate = Arc<dyn AccessGate>;

/// Bearer token authentication
///
/// Always resolves to an [`AuthContext`]; handlers reject `Anonymous`
/// callers themselves. A request without an `Authorization` header is
/// refused by the framework before reaching the handler.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub AuthContext);

impl BearerAuth {
    pub fn user_id(&self) -> Option<&UserId> {
        self.0.user_id()
    }
}

async fn bearer_checker(req: &Request, bearer: Bearer) -> Option<AuthContext> {
    match req.data::<SharedAccessGate>() {
        Some(gate) => Some(gate.resolve(&bearer.token)),
        None => {
            tracing::error!("No access gate attached to the request");
            Some(AuthContext::Anonymous)
        }
    }
}

pub fn unauthenticated() -> Json<ErrorResponse> {
    ErrorResponse::new("Unauthenticated", "User not authenticated")
}
