use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartMerge, validate_quantity};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartMerge, CartError> {
        self.logger.info(&format!(
            "Adding {} x product {} to cart of {}",
            params.quantity, params.product_id, params.user_id
        ));

        if let Err(err) = validate_quantity(params.quantity) {
            self.logger
                .warn(&format!("Rejected cart quantity {}", params.quantity));
            return Err(err);
        }

        let outcome = self
            .repository
            .add_or_merge(&params.user_id, params.product_id, params.quantity)
            .await
            .map_err(|e| {
                if e.is_store_failure() {
                    self.logger.error(&format!(
                        "Failed to add product {} to cart of {}: {}",
                        params.product_id, params.user_id, e
                    ));
                }
                CartError::from(e)
            })?;

        match &outcome {
            CartMerge::Created(entry) => self
                .logger
                .info(&format!("Cart entry created: {}", entry.id)),
            CartMerge::Merged(entry) => self.logger.info(&format!(
                "Cart entry {} merged, quantity now {}",
                entry.id, entry.quantity
            )),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartEntry, CartLine};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::{Sequence, mock};
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn add_or_merge(&self, user_id: &UserId, product_id: Uuid, quantity: i32) -> Result<CartMerge, RepositoryError>;
            async fn list(&self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError>;
            async fn remove(&self, user_id: &UserId, entry_id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn user_a() -> UserId {
        UserId::new("user-a")
    }

    #[tokio::test]
    async fn should_create_then_merge_into_the_same_entry() {
        let entry_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let created_at = Utc::now();
        let mut seq = Sequence::new();
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_add_or_merge()
            .withf(move |user, product, quantity| {
                *user == user_a() && *product == product_id && *quantity == 2
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |user, product, quantity| {
                Ok(CartMerge::Created(CartEntry::from_repository(
                    entry_id,
                    user.clone(),
                    product,
                    quantity,
                    created_at,
                    created_at,
                )))
            });
        mock_repo
            .expect_add_or_merge()
            .withf(move |_, product, quantity| *product == product_id && *quantity == 3)
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |user, product, quantity| {
                Ok(CartMerge::Merged(CartEntry::from_repository(
                    entry_id,
                    user.clone(),
                    product,
                    2 + quantity,
                    created_at,
                    Utc::now(),
                )))
            });

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let first = use_case
            .execute(AddCartItemParams {
                user_id: user_a(),
                product_id,
                quantity: 2,
            })
            .await
            .unwrap();
        let second = use_case
            .execute(AddCartItemParams {
                user_id: user_a(),
                product_id,
                quantity: 3,
            })
            .await
            .unwrap();

        assert!(matches!(first, CartMerge::Created(ref e) if e.quantity == 2));
        assert!(matches!(second, CartMerge::Merged(ref e) if e.quantity == 5));
        assert_eq!(first.entry().id, second.entry().id);
        assert_eq!(second.entry().created_at, created_at);
    }

    #[tokio::test]
    async fn should_reject_zero_quantity_without_touching_store() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_add_or_merge().never();

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                user_id: user_a(),
                product_id: Uuid::new_v4(),
                quantity: 0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_surface_store_timeout() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_add_or_merge()
            .returning(|_, _, _| Err(RepositoryError::Timeout));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                user_id: user_a(),
                product_id: Uuid::new_v4(),
                quantity: 1,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::Timeout)
        ));
    }
}
