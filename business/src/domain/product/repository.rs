use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::PageRequest;

use super::model::{Product, ProductInput};
use super::query::ProductFilter;

/// Sole writer of product records.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Newest first. Returns the requested window and the number of records
    /// matching `filter` regardless of the window.
    async fn list(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Product>, u64), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Assigns the id and both timestamps.
    async fn create(&self, input: &ProductInput) -> Result<Product, RepositoryError>;
    /// Overwrites every mutable field and refreshes `updated_at`.
    async fn update(&self, id: Uuid, input: &ProductInput) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
