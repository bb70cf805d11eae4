use super::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

/// Service port for one-way password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;
    /// `Ok(false)` for a wrong password; `Err` only when the stored hash is unusable.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError>;
}

/// Service port for issuing and checking bearer tokens.
pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: &UserId) -> Result<String, AuthError>;
    fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}
