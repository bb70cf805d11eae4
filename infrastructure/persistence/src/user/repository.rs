use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::auth::model::{NewUser, User};
use business::domain::auth::repository::UserRepository;
use business::domain::errors::RepositoryError;

use super::entity::{USER_COLUMNS, UserEntity};
use crate::db::{DEFAULT_OPERATION_TIMEOUT, bounded};

pub struct UserRepositoryPostgres {
    pool: PgPool,
    timeout: Duration,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let query = format!(
            r#"INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING {USER_COLUMNS}"#
        );

        let entity = bounded(
            self.timeout,
            sqlx::query_as::<_, UserEntity>(&query)
                .bind(Uuid::new_v4())
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.password_hash)
                .bind(Utc::now())
                .fetch_one(&self.pool),
        )
        .await?;

        Ok(entity.into_domain())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let entity = bounded(
            self.timeout,
            sqlx::query_as::<_, UserEntity>(&query)
                .bind(email)
                .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(|e| e.into_domain()))
    }
}
