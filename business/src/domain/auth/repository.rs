use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `Duplicated` when the e-mail is already registered.
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}
