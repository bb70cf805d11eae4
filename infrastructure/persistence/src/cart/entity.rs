use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{CartEntry, CartLine, CartMerge};
use business::domain::shared::value_objects::UserId;

use crate::product::entity::ProductEntity;

pub const CART_COLUMNS: &str = "id, user_id, product_id, quantity, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: Uuid,
    pub user_id: String,
    pub product_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartEntry {
        CartEntry::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.product_id,
            self.quantity,
            self.created_at,
            self.updated_at,
        )
    }
}

/// Row returned by the add-or-merge upsert. `inserted` is false when the
/// statement took the conflict branch.
#[derive(Debug, FromRow)]
pub struct CartUpsertEntity {
    #[sqlx(flatten)]
    pub item: CartItemEntity,
    pub inserted: bool,
}

impl CartUpsertEntity {
    pub fn into_domain(self) -> CartMerge {
        let entry = self.item.into_domain();
        if self.inserted {
            CartMerge::Created(entry)
        } else {
            CartMerge::Merged(entry)
        }
    }
}

/// A cart row joined with its product; product columns carry a `p_` prefix.
#[derive(Debug, FromRow)]
pub struct CartLineEntity {
    #[sqlx(flatten)]
    pub item: CartItemEntity,
    pub p_id: Uuid,
    pub p_name: String,
    pub p_price: BigDecimal,
    pub p_image: String,
    pub p_description: String,
    pub p_category: String,
    pub p_stock: i32,
    pub p_created_at: DateTime<Utc>,
    pub p_updated_at: DateTime<Utc>,
}

impl CartLineEntity {
    pub fn into_domain(self) -> CartLine {
        let product = ProductEntity {
            id: self.p_id,
            name: self.p_name,
            price: self.p_price,
            image: self.p_image,
            description: self.p_description,
            category: self.p_category,
            stock: self.p_stock,
            created_at: self.p_created_at,
            updated_at: self.p_updated_at,
        };
        CartLine {
            entry: self.item.into_domain(),
            product: product.into_domain(),
        }
    }
}
