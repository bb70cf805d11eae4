use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::{Product, ProductInput};
use business::domain::shared::identifier;
use business::domain::shared::pagination::{Page, PageInfo};

#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price, zero or more
    pub price: f64,
    /// Image reference
    #[oai(default)]
    pub image: String,
    #[oai(default)]
    pub description: String,
    /// Category (cannot be empty)
    pub category: String,
    /// Units in stock, zero or more
    pub stock: i32,
}

impl From<ProductRequest> for ProductInput {
    fn from(request: ProductRequest) -> Self {
        ProductInput {
            name: request.name,
            price: request.price,
            image: request.image,
            description: request.description,
            category: request.category,
            stock: request.stock,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub category: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: identifier::encode(product.id),
            name: product.name,
            price: product.price,
            image: product.image,
            description: product.description,
            category: product.category,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaginationResponse {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    #[oai(rename = "totalPages")]
    pub total_pages: u64,
}

impl From<PageInfo> for PaginationResponse {
    fn from(info: PageInfo) -> Self {
        Self {
            page: info.page,
            limit: info.limit,
            total: info.total,
            total_pages: info.total_pages,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub pagination: PaginationResponse,
}

impl From<Page<Product>> for ProductListResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            products: page.items.into_iter().map(|p| p.into()).collect(),
            pagination: page.info.into(),
        }
    }
}
