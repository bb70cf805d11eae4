use anyhow::Context;
use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod message;
    pub mod security;
    pub mod tags;
    #[cfg(test)]
    pub mod test_support;
    pub mod auth {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod product {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod auth_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod env;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
/// - config/: environment-driven settings (server, CORS, database, tokens)
/// - setup/: dependency injection and route assembly
/// - api/: route handlers, DTOs and error mappers per resource
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env().context("Invalid configuration")?;

    // 4. Initialize database
    let database = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(database, &config.auth);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
