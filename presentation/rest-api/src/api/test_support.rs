use std::sync::Arc;

use poem::Endpoint;
use poem::test::{TestClient, TestResponse};
use poem_openapi::OpenApi;

use business::domain::auth::gate::AccessGate;
use business::domain::auth::model::AuthContext;
use business::domain::shared::value_objects::UserId;

use crate::setup::server::build_routes;

pub const TOKEN_A: &str = "Bearer token-a";
pub const TOKEN_B: &str = "Bearer token-b";

/// Recognises two fixed tokens; anything else is anonymous.
pub struct FixedGate;

impl AccessGate for FixedGate {
    fn resolve(&self, bearer_token: &str) -> AuthContext {
        match bearer_token {
            "token-a" => AuthContext::Authenticated {
                user_id: UserId::new("user-a"),
            },
            "token-b" => AuthContext::Authenticated {
                user_id: UserId::new("user-b"),
            },
            _ => AuthContext::Anonymous,
        }
    }
}

pub fn client<T: OpenApi + 'static>(api: T) -> TestClient<impl Endpoint> {
    TestClient::new(build_routes(
        api,
        Arc::new(FixedGate),
        "http://localhost:8080",
    ))
}

pub async fn json_body(response: TestResponse) -> serde_json::Value {
    response
        .0
        .into_body()
        .into_json()
        .await
        .expect("response body is JSON")
}
