use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub category: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: f64,
        image: String,
        description: String,
        category: String,
        stock: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            image,
            description,
            category,
            stock,
            created_at,
            updated_at,
        }
    }
}

/// The caller-supplied fields of a product. Used for both create and update;
/// an update overwrites every one of these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub category: String,
    pub stock: i32,
}

impl ProductInput {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if self.category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }
        if self.stock < 0 {
            return Err(ProductError::NegativeStock);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> ProductInput {
        ProductInput {
            name: "Mug".to_string(),
            price: 9.99,
            image: String::new(),
            description: String::new(),
            category: "Home".to_string(),
            stock: 5,
        }
    }

    #[test]
    fn should_accept_valid_input() {
        assert!(mug().validate().is_ok());
    }

    #[test]
    fn should_accept_zero_price_and_stock() {
        let input = ProductInput {
            price: 0.0,
            stock: 0,
            ..mug()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let input = ProductInput {
            name: "   ".to_string(),
            ..mug()
        };
        assert!(matches!(input.validate(), Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_when_category_empty() {
        let input = ProductInput {
            category: String::new(),
            ..mug()
        };
        assert!(matches!(input.validate(), Err(ProductError::CategoryEmpty)));
    }

    #[test]
    fn should_reject_negative_price() {
        let input = ProductInput {
            price: -0.01,
            ..mug()
        };
        assert!(matches!(input.validate(), Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn should_reject_non_finite_price() {
        let input = ProductInput {
            price: f64::NAN,
            ..mug()
        };
        assert!(matches!(input.validate(), Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn should_reject_negative_stock() {
        let input = ProductInput {
            stock: -1,
            ..mug()
        };
        assert!(matches!(input.validate(), Err(ProductError::NegativeStock)));
    }
}
