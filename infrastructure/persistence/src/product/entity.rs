use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

pub const PRODUCT_COLUMNS: &str =
    "id, name, price, image, description, category, stock, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub image: String,
    pub description: String,
    pub category: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.price.to_f64().unwrap_or_default(),
            self.image,
            self.description,
            self.category,
            self.stock,
            self.created_at,
            self.updated_at,
        )
    }
}

/// Prices are stored as NUMERIC; non-finite values never reach the table.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    if !price.is_finite() {
        return Err(RepositoryError::ConstraintViolation);
    }
    BigDecimal::from_str(&price.to_string()).map_err(|_| RepositoryError::ConstraintViolation)
}
