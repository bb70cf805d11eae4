use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::model::CartMerge;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::shared::identifier;

use crate::api::cart::dto::{AddCartItemRequest, CartEntryResponse, CartResponse};
use crate::api::cart::error_mapper::invalid_cart_item_id;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::message::MessageResponse;
use crate::api::product::error_mapper::invalid_product_id;
use crate::api::security::{BearerAuth, unauthenticated};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            get_cart_use_case,
            remove_item_use_case,
        }
    }
}

/// Shopping cart API
///
/// Every endpoint acts on the cart of the authenticated caller.
#[OpenApi]
impl CartApi {
    /// Add a product to the cart
    ///
    /// Adding a product already in the cart increases its quantity instead
    /// of creating a second entry.
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, auth: BearerAuth, body: Json<AddCartItemRequest>) -> AddCartItemResponse {
        let Some(user_id) = auth.user_id() else {
            return AddCartItemResponse::Unauthorized(unauthenticated());
        };
        let Ok(product_id) = identifier::decode(&body.0.product_id) else {
            return AddCartItemResponse::BadRequest(invalid_product_id());
        };

        let params = AddCartItemParams {
            user_id: user_id.clone(),
            product_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(CartMerge::Created(entry)) => AddCartItemResponse::Created(Json(entry.into())),
            Ok(CartMerge::Merged(_)) => {
                AddCartItemResponse::Merged(MessageResponse::new("Cart updated successfully"))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCartItemResponse::BadRequest(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the cart
    ///
    /// Entries whose product has been deleted are omitted.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: BearerAuth) -> GetCartResponse {
        let Some(user_id) = auth.user_id() else {
            return GetCartResponse::Unauthorized(unauthenticated());
        };

        match self
            .get_cart_use_case
            .execute(GetCartParams {
                user_id: user_id.clone(),
            })
            .await
        {
            Ok(lines) => GetCartResponse::Ok(Json(CartResponse {
                cart: lines.into_iter().map(|l| l.into()).collect(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Remove an entry from the cart
    ///
    /// Entries of other users are reported as not found.
    #[oai(path = "/cart/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, auth: BearerAuth, id: Path<String>) -> RemoveCartItemResponse {
        let Some(user_id) = auth.user_id() else {
            return RemoveCartItemResponse::Unauthorized(unauthenticated());
        };
        let Ok(id) = identifier::decode(&id.0) else {
            return RemoveCartItemResponse::BadRequest(invalid_cart_item_id());
        };

        match self
            .remove_item_use_case
            .execute(RemoveCartItemParams {
                user_id: user_id.clone(),
                id,
            })
            .await
        {
            Ok(()) => RemoveCartItemResponse::Ok(MessageResponse::new("Item removed from cart")),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveCartItemResponse::NotFound(json),
                    _ => RemoveCartItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    /// A new entry was created
    #[oai(status = 201)]
    Created(Json<CartEntryResponse>),
    /// The quantity of an existing entry was increased
    #[oai(status = 200)]
    Merged(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
