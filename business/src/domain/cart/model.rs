use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// One line of a user's cart. At most one exists per (user, product) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub id: Uuid,
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntry {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        product_id: Uuid,
        quantity: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            product_id,
            quantity,
            created_at,
            updated_at,
        }
    }
}

/// Quantity requested by an add; always at least one.
pub fn validate_quantity(quantity: i32) -> Result<(), CartError> {
    if quantity < 1 {
        return Err(CartError::InvalidQuantity);
    }
    Ok(())
}

/// Result of an add: a fresh entry, or an existing one whose quantity grew.
#[derive(Debug, Clone, PartialEq)]
pub enum CartMerge {
    Created(CartEntry),
    Merged(CartEntry),
}

impl CartMerge {
    pub fn entry(&self) -> &CartEntry {
        match self {
            CartMerge::Created(entry) | CartMerge::Merged(entry) => entry,
        }
    }
}

/// A cart entry joined with the product it references.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub entry: CartEntry,
    pub product: Product,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_positive_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(250).is_ok());
    }

    #[test]
    fn should_reject_zero_and_negative_quantity() {
        assert!(matches!(validate_quantity(0), Err(CartError::InvalidQuantity)));
        assert!(matches!(validate_quantity(-4), Err(CartError::InvalidQuantity)));
    }

    #[test]
    fn should_expose_entry_of_either_outcome() {
        let now = Utc::now();
        let entry = CartEntry::from_repository(
            Uuid::new_v4(),
            UserId::new("user-a"),
            Uuid::new_v4(),
            2,
            now,
            now,
        );

        assert_eq!(CartMerge::Created(entry.clone()).entry(), &entry);
        assert_eq!(CartMerge::Merged(entry.clone()).entry(), &entry);
    }
}
