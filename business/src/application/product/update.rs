use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if let Err(err) = params.input.validate() {
            self.logger
                .warn(&format!("Rejected update of product {}: {}", params.id, err));
            return Err(err);
        }

        // Existence is decided by the same statement that writes.
        let product = self
            .repository
            .update(params.id, &params.input)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => {
                    if other.is_store_failure() {
                        self.logger
                            .error(&format!("Failed to update product {}: {}", params.id, other));
                    }
                    ProductError::Repository(other)
                }
            })?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
