//! Repository tests against a live PostgreSQL. Run with
//! `DATABASE_URL=postgres://... cargo test -p persistence -- --ignored`.

use business::domain::auth::model::NewUser;
use business::domain::auth::repository::UserRepository;
use business::domain::cart::model::CartMerge;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::product::model::ProductInput;
use business::domain::product::query::ProductFilter;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::pagination::PageRequest;
use business::domain::shared::value_objects::UserId;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use sqlx::PgPool;
use uuid::Uuid;

fn input(name: &str, category: &str) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        price: 12.5,
        image: String::new(),
        description: String::new(),
        category: category.to_string(),
        stock: 4,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn should_paginate_filtered_products_newest_first(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    repo.create(&input("Red Shirt", "Apparel")).await.unwrap();
    repo.create(&input("Blue SHIRT", "Apparel")).await.unwrap();
    repo.create(&input("Shirt Hanger", "Home")).await.unwrap();

    let filter = ProductFilter::new(Some("shirt".to_string()), Some("Apparel".to_string()));
    let (first, total) = repo
        .list(&filter, &PageRequest::new(Some(1), Some(1)).unwrap())
        .await
        .unwrap();
    let (second, _) = repo
        .list(&filter, &PageRequest::new(Some(2), Some(1)).unwrap())
        .await
        .unwrap();
    let (beyond, total_beyond) = repo
        .list(&filter, &PageRequest::new(Some(3), Some(1)).unwrap())
        .await
        .unwrap();

    assert_eq!(total, 2);
    assert_eq!(first[0].name, "Blue SHIRT");
    assert_eq!(second[0].name, "Red Shirt");
    assert!(beyond.is_empty());
    assert_eq!(total_beyond, 2);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn should_overwrite_product_and_report_missing_ids(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    let created = repo.create(&input("Mug", "Home")).await.unwrap();
    assert_eq!(created.created_at, created.updated_at);

    let updated = repo
        .update(created.id, &input("Large Mug", "Kitchen"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Large Mug");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    repo.delete(created.id).await.unwrap();
    assert_eq!(repo.delete(created.id).await, Err(RepositoryError::NotFound));
    assert_eq!(
        repo.get_by_id(created.id).await.unwrap_err(),
        RepositoryError::NotFound
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn should_store_prices_without_rounding_or_capping(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    for price in [9.999, 0.004, 1e10, 123_456_789_012.345] {
        let created = repo
            .create(&ProductInput {
                price,
                ..input("Mug", "Home")
            })
            .await
            .unwrap();
        assert_eq!(created.price, price);
        assert_eq!(repo.get_by_id(created.id).await.unwrap().price, price);

        let updated = repo
            .update(
                created.id,
                &ProductInput {
                    price: price * 2.0,
                    ..input("Mug", "Home")
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.price, price * 2.0);
        assert_eq!(repo.get_by_id(created.id).await.unwrap().price, price * 2.0);
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn should_reject_rows_breaking_table_constraints(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    let result = repo
        .create(&ProductInput {
            stock: -1,
            ..input("Mug", "Home")
        })
        .await;
    assert_eq!(result.unwrap_err(), RepositoryError::ConstraintViolation);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn should_merge_cart_adds_and_scope_them_by_user(pool: PgPool) {
    let products = ProductRepositoryPostgres::new(pool.clone());
    let cart = CartRepositoryPostgres::new(pool);
    let product = products.create(&input("Lamp", "Home")).await.unwrap();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");

    let first = cart.add_or_merge(&alice, product.id, 2).await.unwrap();
    let second = cart.add_or_merge(&alice, product.id, 3).await.unwrap();
    assert!(matches!(first, CartMerge::Created(_)));
    assert!(matches!(second, CartMerge::Merged(ref e) if e.quantity == 5));
    assert_eq!(first.entry().id, second.entry().id);

    assert!(cart.list(&bob).await.unwrap().is_empty());
    assert_eq!(
        cart.remove(&bob, first.entry().id).await,
        Err(RepositoryError::NotFound)
    );

    let lines = cart.list(&alice).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product.name, "Lamp");

    cart.remove(&alice, first.entry().id).await.unwrap();
    assert!(cart.list(&alice).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn should_merge_concurrent_adds_without_losing_increments(pool: PgPool) {
    let products = ProductRepositoryPostgres::new(pool.clone());
    let product = products.create(&input("Pen", "Office")).await.unwrap();
    let product_id = product.id;
    let user = UserId::new("carol");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let cart = CartRepositoryPostgres::new(pool.clone());
        let user = user.clone();
        handles.push(tokio::spawn(async move {
            cart.add_or_merge(&user, product_id, 1).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let lines = CartRepositoryPostgres::new(pool).list(&user).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].entry.quantity, 8);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn should_hide_entries_whose_product_was_deleted(pool: PgPool) {
    let products = ProductRepositoryPostgres::new(pool.clone());
    let cart = CartRepositoryPostgres::new(pool);
    let kept = products.create(&input("Desk", "Office")).await.unwrap();
    let gone = products.create(&input("Chair", "Office")).await.unwrap();
    let user = UserId::new("dave");

    cart.add_or_merge(&user, kept.id, 1).await.unwrap();
    cart.add_or_merge(&user, gone.id, 1).await.unwrap();
    cart.add_or_merge(&user, Uuid::new_v4(), 1).await.unwrap();
    products.delete(gone.id).await.unwrap();

    let lines = cart.list(&user).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product.id, kept.id);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn should_refuse_duplicate_emails(pool: PgPool) {
    let repo = UserRepositoryPostgres::new(pool);
    let user = NewUser {
        name: "Erin".to_string(),
        email: "erin@example.com".to_string(),
        password_hash: "hash".to_string(),
    };

    let created = repo.create(&user).await.unwrap();
    assert_eq!(repo.create(&user).await.unwrap_err(), RepositoryError::Duplicated);
    let found = repo.find_by_email("erin@example.com").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
}
