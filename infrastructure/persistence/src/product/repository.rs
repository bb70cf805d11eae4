use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductInput};
use business::domain::product::query::ProductFilter;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::pagination::PageRequest;

use super::entity::{PRODUCT_COLUMNS, ProductEntity, price_to_decimal};
use crate::db::{DEFAULT_OPERATION_TIMEOUT, bounded};

// Substring match on name ignoring case, exact match on category. A NULL
// parameter disables its condition.
const FILTER_CLAUSE: &str = "($1::text IS NULL OR strpos(lower(name), lower($1)) > 0) \
     AND ($2::text IS NULL OR category = $2)";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
    timeout: Duration,
}

impl ProductRepositoryPostgres {
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
impl ProductRepository for ProductRepositoryPostgres {
    async fn list(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Product>, u64), RepositoryError> {
        let select = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE {FILTER_CLAUSE} \
             ORDER BY created_at DESC, seq ASC LIMIT $3 OFFSET $4"
        );
        let count = format!("SELECT COUNT(*) FROM products WHERE {FILTER_CLAUSE}");
        let limit = i64::try_from(page.limit()).unwrap_or(i64::MAX);
        let offset = i64::try_from(page.skip()).unwrap_or(i64::MAX);

        let (entities, total) = bounded(self.timeout, async {
            let entities = sqlx::query_as::<_, ProductEntity>(&select)
                .bind(filter.search.as_deref())
                .bind(filter.category.as_deref())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
            let total = sqlx::query_scalar::<_, i64>(&count)
                .bind(filter.search.as_deref())
                .bind(filter.category.as_deref())
                .fetch_one(&self.pool)
                .await?;
            Ok::<_, sqlx::Error>((entities, total))
        })
        .await?;

        Ok((
            entities.into_iter().map(|e| e.into_domain()).collect(),
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let entity = bounded(
            self.timeout,
            sqlx::query_as::<_, ProductEntity>(&query)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, input: &ProductInput) -> Result<Product, RepositoryError> {
        let query = format!(
            r#"INSERT INTO products (id, name, price, image, description, category, stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING {PRODUCT_COLUMNS}"#
        );
        let price = price_to_decimal(input.price)?;

        let entity = bounded(
            self.timeout,
            sqlx::query_as::<_, ProductEntity>(&query)
                .bind(Uuid::new_v4())
                .bind(&input.name)
                .bind(price)
                .bind(&input.image)
                .bind(&input.description)
                .bind(&input.category)
                .bind(input.stock)
                .bind(Utc::now())
                .fetch_one(&self.pool),
        )
        .await?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: Uuid, input: &ProductInput) -> Result<Product, RepositoryError> {
        let query = format!(
            r#"UPDATE products SET
                name = $2,
                price = $3,
                image = $4,
                description = $5,
                category = $6,
                stock = $7,
                updated_at = $8
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}"#
        );
        let price = price_to_decimal(input.price)?;

        let entity = bounded(
            self.timeout,
            sqlx::query_as::<_, ProductEntity>(&query)
                .bind(id)
                .bind(&input.name)
                .bind(price)
                .bind(&input.image)
                .bind(&input.description)
                .bind(&input.category)
                .bind(input.stock)
                .bind(Utc::now())
                .fetch_optional(&self.pool),
        )
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = bounded(
            self.timeout,
            sqlx::query("DELETE FROM products WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
