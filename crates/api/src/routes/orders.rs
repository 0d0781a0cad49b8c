//! Order history endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use cart::CartStore;
use checkout::PaymentGateway;
use common::UserId;
use orders::Order;

use crate::routes::AppState;

/// GET /orders/{user_id} — all orders ever recorded for a user, oldest first.
#[tracing::instrument(skip(state))]
pub async fn list_for_user<C, P>(
    State(state): State<Arc<AppState<C, P>>>,
    Path(user_id): Path<String>,
) -> Json<Vec<Order>>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let orders = state.ledger.orders_for(&UserId::from(user_id)).await;
    Json(orders)
}
