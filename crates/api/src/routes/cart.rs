//! Cart endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use cart::{CartItem, CartStore};
use catalog::Product;
use checkout::PaymentGateway;
use common::{Money, ProductId, UserId};
use serde::Deserialize;

use crate::error::ApiError;
use crate::routes::AppState;

// -- Request types --

/// Product payload as sent by clients, with the price in cents.
#[derive(Deserialize)]
pub struct ProductPayload {
    pub id: u64,
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: u32,
}

impl From<ProductPayload> for Product {
    fn from(p: ProductPayload) -> Self {
        Product::new(p.id, p.name, Money::from_cents(p.price_cents), p.category, p.stock)
    }
}

#[derive(Deserialize)]
pub struct AddItemRequest {
    pub user_id: Option<String>,
    pub product: Option<ProductPayload>,
    pub quantity: Option<u32>,
}

#[derive(Deserialize)]
pub struct UpdateQuantityRequest {
    pub user_id: Option<String>,
    pub product_id: Option<u64>,
    pub quantity: Option<u32>,
}

// -- Handlers --

/// GET /cart/{user_id} — current cart contents.
#[tracing::instrument(skip(state))]
pub async fn get_cart<C, P>(
    State(state): State<Arc<AppState<C, P>>>,
    Path(user_id): Path<String>,
) -> Json<Vec<CartItem>>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let items = state.cart.get_cart(&UserId::from(user_id)).await;
    Json(items)
}

/// POST /cart — add a product to a cart. Quantity defaults to 1.
#[tracing::instrument(skip(state, req))]
pub async fn add_item<C, P>(
    State(state): State<Arc<AppState<C, P>>>,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<Vec<CartItem>>, ApiError>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let user_id = req
        .user_id
        .ok_or_else(|| ApiError::invalid_input("user_id and product are required"))?;
    let product = req
        .product
        .ok_or_else(|| ApiError::invalid_input("user_id and product are required"))?;
    let quantity = req.quantity.unwrap_or(1);

    let items = state
        .cart
        .add_item(&UserId::from(user_id), product.into(), quantity)
        .await;
    Ok(Json(items))
}

/// PUT /cart — overwrite the quantity of an existing cart line.
#[tracing::instrument(skip(state, req))]
pub async fn update_quantity<C, P>(
    State(state): State<Arc<AppState<C, P>>>,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<Json<Vec<CartItem>>, ApiError>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let (Some(user_id), Some(product_id), Some(quantity)) =
        (req.user_id, req.product_id, req.quantity)
    else {
        return Err(ApiError::invalid_input(
            "user_id, product_id and quantity are required",
        ));
    };

    let items = state
        .cart
        .set_quantity(&UserId::from(user_id), ProductId::new(product_id), quantity)
        .await;
    Ok(Json(items))
}

/// DELETE /cart/{user_id}/{product_id} — remove a product from a cart.
#[tracing::instrument(skip(state))]
pub async fn remove_item<C, P>(
    State(state): State<Arc<AppState<C, P>>>,
    Path((user_id, product_id)): Path<(String, String)>,
) -> Result<Json<Vec<CartItem>>, ApiError>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let product_id: ProductId = product_id
        .parse()
        .map_err(|_| ApiError::invalid_input(format!("invalid product id: {product_id}")))?;

    let items = state
        .cart
        .remove_item(&UserId::from(user_id), product_id)
        .await;
    Ok(Json(items))
}

/// DELETE /cart/clear/{user_id} — empty a cart.
#[tracing::instrument(skip(state))]
pub async fn clear<C, P>(
    State(state): State<Arc<AppState<C, P>>>,
    Path(user_id): Path<String>,
) -> Json<Vec<CartItem>>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let items = state.cart.clear(&UserId::from(user_id)).await;
    Json(items)
}
