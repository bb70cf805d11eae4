use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use uuid::Uuid;

use super::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn user_id(&self) -> UserId {
        UserId::from(self.id)
    }
}

/// A registration that passed validation; the password is already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Lower-cases and trims an e-mail address, rejecting malformed ones.
pub fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    if !EMAIL_PATTERN.is_match(&email) {
        return Err(AuthError::InvalidEmail);
    }
    Ok(email)
}

pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort);
    }
    Ok(())
}

/// Who is calling. Produced by the access gate for every protected request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthContext {
    Authenticated { user_id: UserId },
    Anonymous,
}

impl AuthContext {
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            AuthContext::Authenticated { user_id } => Some(user_id),
            AuthContext::Anonymous => None,
        }
    }
}

/// Issued on successful register or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_email() {
        assert_eq!(
            normalize_email("  Alice@Example.COM ").unwrap(),
            "alice@example.com"
        );
    }

    #[test]
    fn should_reject_malformed_email() {
        for email in ["", "alice", "alice@", "@example.com", "alice@example", "a b@c.d"] {
            assert!(
                matches!(normalize_email(email), Err(AuthError::InvalidEmail)),
                "email: {email:?}"
            );
        }
    }

    #[test]
    fn should_reject_short_password() {
        assert!(matches!(
            validate_password("12345"),
            Err(AuthError::PasswordTooShort)
        ));
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn should_expose_user_id_only_when_authenticated() {
        let context = AuthContext::Authenticated {
            user_id: UserId::new("user-a"),
        };
        assert_eq!(context.user_id(), Some(&UserId::new("user-a")));
        assert_eq!(AuthContext::Anonymous.user_id(), None);
    }
}
