use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthSession;
use crate::domain::auth::repository::UserRepository;
use crate::domain::auth::services::{PasswordHasher, TokenService};
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<AuthSession, AuthError> {
        let email = params.email.trim().to_lowercase();
        if email.is_empty() || params.password.is_empty() {
            return Err(AuthError::CredentialsRequired);
        }

        self.logger.info(&format!("Login attempt: {}", email));

        let found = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|e| {
                self.logger.error(&format!("Failed to look up user: {}", e));
                AuthError::from(e)
            })?;

        let Some(user) = found else {
            // An unknown e-mail still pays for one key derivation, like a wrong password.
            let _ = self.hasher.hash(&params.password);
            self.logger.warn(&format!("Login for unknown e-mail: {}", email));
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(&params.password, &user.password_hash)? {
            self.logger
                .warn(&format!("Wrong password for user: {}", user.id));
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.user_id())?;

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(AuthSession { token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::{NewUser, User};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
        }
    }

    mock! {
        pub Hasher {}

        impl PasswordHasher for Hasher {
            fn hash(&self, password: &str) -> Result<String, AuthError>;
            fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError>;
        }
    }

    mock! {
        pub Tokens {}

        impl TokenService for Tokens {
            fn issue(&self, user_id: &UserId) -> Result<String, AuthError>;
            fn verify(&self, token: &str) -> Result<UserId, AuthError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn token_service() -> Arc<dyn TokenService> {
        let mut tokens = MockTokens::new();
        tokens
            .expect_issue()
            .returning(|user_id| Ok(format!("token-for-{}", user_id)));
        Arc::new(tokens)
    }

    fn stored_user(email: &str, password_hash: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn hasher() -> Arc<dyn PasswordHasher> {
        let mut hasher = MockHasher::new();
        hasher
            .expect_verify()
            .returning(|password, hash| Ok(hash == format!("hashed:{}", password)));
        Arc::new(hasher)
    }

    #[tokio::test]
    async fn should_issue_token_for_valid_credentials() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .returning(|email| Ok(Some(stored_user(email, "hashed:secret123"))));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: hasher(),
            tokens: token_service(),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(LoginParams {
                email: "ALICE@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.token, format!("token-for-{}", session.user.id));
    }

    #[tokio::test]
    async fn should_reject_wrong_password() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(email, "hashed:secret123"))));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: hasher(),
            tokens: token_service(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                email: "alice@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn should_reject_unknown_email_the_same_way() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_email().returning(|_| Ok(None));
        let mut mock_hasher = MockHasher::new();
        mock_hasher
            .expect_hash()
            .withf(|password| password == "secret123")
            .times(1)
            .returning(|password| Ok(format!("hashed:{}", password)));
        mock_hasher.expect_verify().never();

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: Arc::new(mock_hasher),
            tokens: token_service(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                email: "nobody@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn should_surface_store_failure() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_email()
            .returning(|_| Err(RepositoryError::Timeout));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: hasher(),
            tokens: token_service(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                email: "alice@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AuthError::Repository(RepositoryError::Timeout)
        ));
    }

    #[tokio::test]
    async fn should_require_both_credentials_without_touching_store() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_email().never();

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: hasher(),
            tokens: token_service(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                email: "  ".to_string(),
                password: "secret123".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AuthError::CredentialsRequired));
    }
}
