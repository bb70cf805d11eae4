use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{CartEntry, CartLine};
use business::domain::shared::identifier;

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Product to add, in canonical id form
    pub product_id: String,
    /// Units to add; at least one
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct CartEntryResponse {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CartEntry> for CartEntryResponse {
    fn from(entry: CartEntry) -> Self {
        Self {
            id: identifier::encode(entry.id),
            user_id: entry.user_id.to_string(),
            product_id: identifier::encode(entry.product_id),
            quantity: entry.quantity,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// A cart entry with the product it references embedded.
#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub product: ProductResponse,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        let entry = CartEntryResponse::from(line.entry);
        Self {
            id: entry.id,
            user_id: entry.user_id,
            product_id: entry.product_id,
            quantity: entry.quantity,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
            product: line.product.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub cart: Vec<CartLineResponse>,
}
