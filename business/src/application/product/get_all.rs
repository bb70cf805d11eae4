use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::ProductFilter;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ProductError> {
        let page = PageRequest::new(params.page, params.limit).inspect_err(|e| {
            self.logger.warn(&format!("Rejected product listing: {}", e));
        })?;
        let filter = ProductFilter::new(params.search, params.category);

        self.logger.info(&format!(
            "Listing products (search: {:?}, category: {:?}, page: {}, limit: {})",
            filter.search,
            filter.category,
            page.page(),
            page.limit()
        ));

        let (items, total) = self.repository.list(&filter, &page).await.map_err(|e| {
            self.logger.error(&format!("Failed to list products: {}", e));
            ProductError::from(e)
        })?;

        self.logger.info(&format!(
            "Found {} products on page {} of {} matching",
            items.len(),
            page.page(),
            total
        ));

        Ok(Page {
            items,
            info: page.info(total),
        })
    }
}
