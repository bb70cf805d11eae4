use poem::{
    Endpoint, EndpointExt, Response, Route, Server as PoemServer, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::{OpenApi, OpenApiService};

use crate::api::error::render_framework_error;
use crate::api::security::SharedAccessGate;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

/// JSON API under `/api`, Swagger UI at `/docs`, raw spec at `/openapi.json`.
/// Every request carries the access gate; framework errors render as JSON.
pub fn build_routes<T: OpenApi + 'static>(
    apis: T,
    access_gate: SharedAccessGate,
    server_url: &str,
) -> impl Endpoint<Output = Response> + use<T> {
    let api_service = OpenApiService::new(apis, "Catalog & Cart API", env!("CARGO_PKG_VERSION"))
        .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/api", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .data(access_gate)
        .catch_all_error(render_framework_error)
}

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let base_url = format!("http://{}", addr);
        let app = build_routes(
            (
                container.health_api,
                container.auth_api,
                container.product_api,
                container.cart_api,
            ),
            container.access_gate,
            &base_url,
        )
        .with(config.cors)
        .with(Tracing);

        tracing::info!("Server running at {}/api", base_url);
        tracing::info!("Swagger UI at {}/docs", base_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", base_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
