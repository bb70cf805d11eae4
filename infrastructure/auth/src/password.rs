use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Error as HashError, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};

use business::domain::auth::errors::AuthError;
use business::domain::auth::services::PasswordHasher;

/// Argon2id with the crate's default parameters and a random salt per hash.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!(error = %e, "Argon2 password hashing failed");
                AuthError::Hashing
            })
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| {
            tracing::error!(error = %e, "Stored password hash is malformed");
            AuthError::Hashing
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => {
                tracing::error!(error = %e, "Argon2 password verification failed");
                Err(AuthError::Hashing)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_verify_password_against_its_hash() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("secret123").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("secret123", &hash).unwrap());
    }

    #[test]
    fn should_not_verify_wrong_password() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("secret123").unwrap();

        assert!(!hasher.verify("secret124", &hash).unwrap());
    }

    #[test]
    fn should_salt_each_hash() {
        let hasher = Argon2PasswordHasher::new();

        assert_ne!(
            hasher.hash("secret123").unwrap(),
            hasher.hash("secret123").unwrap()
        );
    }

    #[test]
    fn should_fail_on_malformed_stored_hash() {
        let hasher = Argon2PasswordHasher::new();

        assert!(matches!(
            hasher.verify("secret123", "not-a-hash"),
            Err(AuthError::Hashing)
        ));
    }
}
