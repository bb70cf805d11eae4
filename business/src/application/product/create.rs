use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.input.name));

        if let Err(err) = params.input.validate() {
            self.logger
                .warn(&format!("Rejected product input: {}", err));
            return Err(err);
        }

        let product = self
            .repository
            .create(&params.input)
            .await
            .map_err(|e| {
                if e.is_store_failure() {
                    self.logger.error(&format!("Failed to create product: {}", e));
                }
                ProductError::from(e)
            })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
