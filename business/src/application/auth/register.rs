use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{
    AuthSession, NewUser, normalize_email, validate_password,
};
use crate::domain::auth::repository::UserRepository;
use crate::domain::auth::services::{PasswordHasher, TokenService};
use crate::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RegisterUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<AuthSession, AuthError> {
        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(AuthError::NameEmpty);
        }
        let email = normalize_email(&params.email)?;
        validate_password(&params.password)?;

        self.logger.info(&format!("Registering user: {}", email));

        let password_hash = self.hasher.hash(&params.password)?;
        let user = self
            .repository
            .create(&NewUser {
                name,
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => AuthError::EmailTaken,
                other => {
                    self.logger
                        .error(&format!("Failed to register user: {}", other));
                    AuthError::Repository(other)
                }
            })?;

        let token = self.tokens.issue(&user.user_id())?;

        self.logger.info(&format!("User registered: {}", user.id));
        Ok(AuthSession { token, user })
    }
}
