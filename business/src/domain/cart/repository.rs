use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{CartLine, CartMerge};

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Creates the (user, product) entry or increments its quantity, as one
    /// atomic step with respect to concurrent adds for the same pair.
    async fn add_or_merge(
        &self,
        user_id: &UserId,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartMerge, RepositoryError>;
    /// Entries whose product no longer exists are omitted.
    async fn list(&self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError>;
    /// `NotFound` both for unknown ids and for entries owned by another user.
    async fn remove(&self, user_id: &UserId, entry_id: Uuid) -> Result<(), RepositoryError>;
}
