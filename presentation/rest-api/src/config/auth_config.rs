use std::env;

use anyhow::{Context, bail};
use chrono::Duration;

use super::env::parse_or;

/// Bearer token settings
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Environment variables:
    /// - JWT_SECRET: HS256 signing secret (required)
    /// - JWT_TTL_HOURS: token lifetime in hours (default: 24)
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET must not be empty");
        }
        let hours = parse_or("JWT_TTL_HOURS", 24i64).max(1);

        Ok(Self {
            jwt_secret,
            token_ttl: Duration::hours(hours),
        })
    }
}
