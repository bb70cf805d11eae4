use std::sync::Arc;

use auth::jwt::JwtTokenService;
use auth::password::Argon2PasswordHasher;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::auth::access_gate::TokenAccessGate;
use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::register::RegisterUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::security::SharedAccessGate;
use crate::config::auth_config::AuthConfig;
use crate::config::database_config::Database;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub access_gate: SharedAccessGate,
}

impl DependencyContainer {
    pub fn new(database: Database, auth: &AuthConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let timeout = database.operation_timeout;
        let product_repository = Arc::new(
            ProductRepositoryPostgres::new(database.pool.clone()).with_timeout(timeout),
        );
        let cart_repository =
            Arc::new(CartRepositoryPostgres::new(database.pool.clone()).with_timeout(timeout));
        let user_repository =
            Arc::new(UserRepositoryPostgres::new(database.pool).with_timeout(timeout));
        let hasher = Arc::new(Argon2PasswordHasher::new());
        let tokens = Arc::new(JwtTokenService::new(
            auth.jwt_secret.as_bytes(),
            auth.token_ttl,
        ));

        // Access gate
        let access_gate: SharedAccessGate = Arc::new(TokenAccessGate {
            tokens: tokens.clone(),
            logger: logger.clone(),
        });

        // Auth use cases
        let register_use_case = Arc::new(RegisterUseCaseImpl {
            repository: user_repository.clone(),
            hasher: hasher.clone(),
            tokens: tokens.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository,
            hasher,
            tokens,
            logger: logger.clone(),
        });

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Cart use cases
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(register_use_case, login_use_case);

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            add_item_use_case,
            get_cart_use_case,
            remove_item_use_case,
        );

        Self {
            health_api,
            auth_api,
            product_api,
            cart_api,
            access_gate,
        }
    }
}
