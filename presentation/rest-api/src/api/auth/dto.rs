use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::auth::model::{AuthSession, User};
use business::domain::shared::identifier;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    /// At least six characters
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user; the password hash is never exposed.
#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: identifier::encode(user.id),
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    /// Bearer token for protected endpoints
    pub token: String,
    pub user: UserResponse,
}

impl From<AuthSession> for SessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            user: session.user.into(),
        }
    }
}
