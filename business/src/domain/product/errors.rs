use crate::domain::shared::pagination::PaginationError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.negative_stock")]
    NegativeStock,
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
