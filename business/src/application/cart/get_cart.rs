use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLine;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Vec<CartLine>, CartError> {
        self.logger
            .info(&format!("Fetching cart of {}", params.user_id));

        let lines = self.repository.list(&params.user_id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to fetch cart of {}: {}", params.user_id, e));
            CartError::from(e)
        })?;

        self.logger
            .info(&format!("Found {} cart lines for {}", lines.len(), params.user_id));
        Ok(lines)
    }
}
