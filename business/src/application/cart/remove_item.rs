use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<(), CartError> {
        self.logger.info(&format!(
            "Removing cart entry {} for {}",
            params.id, params.user_id
        ));

        // Ownership is part of the delete predicate, so a foreign entry is just "not found".
        self.repository
            .remove(&params.user_id, params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => {
                    self.logger.error(&format!(
                        "Failed to remove cart entry {}: {}",
                        params.id, other
                    ));
                    CartError::Repository(other)
                }
            })?;

        self.logger
            .info(&format!("Cart entry removed: {}", params.id));
        Ok(())
    }
}
