use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::{CartLine, CartMerge};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{CART_COLUMNS, CartLineEntity, CartUpsertEntity};
use crate::db::{DEFAULT_OPERATION_TIMEOUT, bounded};

pub struct CartRepositoryPostgres {
    pool: PgPool,
    timeout: Duration,
}

impl CartRepositoryPostgres {
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
impl CartRepository for CartRepositoryPostgres {
    async fn add_or_merge(
        &self,
        user_id: &UserId,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartMerge, RepositoryError> {
        // Single statement: the unique (user_id, product_id) key serialises
        // concurrent adds, so increments are never lost. xmax is zero only
        // for a freshly inserted row.
        let query = format!(
            r#"INSERT INTO cart_items (id, user_id, product_id, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT (user_id, product_id) DO UPDATE SET
                quantity = cart_items.quantity + EXCLUDED.quantity,
                updated_at = EXCLUDED.updated_at
            RETURNING {CART_COLUMNS}, (xmax = 0) AS inserted"#
        );

        let entity = bounded(
            self.timeout,
            sqlx::query_as::<_, CartUpsertEntity>(&query)
                .bind(Uuid::new_v4())
                .bind(user_id.as_str())
                .bind(product_id)
                .bind(quantity)
                .bind(Utc::now())
                .fetch_one(&self.pool),
        )
        .await?;

        Ok(entity.into_domain())
    }

    async fn list(&self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let entities = bounded(
            self.timeout,
            sqlx::query_as::<_, CartLineEntity>(
                r#"SELECT c.id, c.user_id, c.product_id, c.quantity, c.created_at, c.updated_at,
                    p.id AS p_id, p.name AS p_name, p.price AS p_price, p.image AS p_image,
                    p.description AS p_description, p.category AS p_category, p.stock AS p_stock,
                    p.created_at AS p_created_at, p.updated_at AS p_updated_at
                FROM cart_items c
                INNER JOIN products p ON p.id = c.product_id
                WHERE c.user_id = $1
                ORDER BY c.created_at ASC, c.seq ASC"#,
            )
            .bind(user_id.as_str())
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn remove(&self, user_id: &UserId, entry_id: Uuid) -> Result<(), RepositoryError> {
        let result = bounded(
            self.timeout,
            sqlx::query("DELETE FROM cart_items WHERE id = $1 AND user_id = $2")
                .bind(entry_id)
                .bind(user_id.as_str())
                .execute(&self.pool),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
