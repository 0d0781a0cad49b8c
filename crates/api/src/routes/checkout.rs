//! Checkout endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use cart::CartStore;
use checkout::{CheckoutReceipt, PaymentDetails, PaymentGateway};
use common::UserId;
use serde::Deserialize;

use crate::error::ApiError;
use crate::routes::AppState;

#[derive(Deserialize)]
pub struct CheckoutRequest {
    /// Absent when nobody is logged in; the coordinator rejects that.
    pub user_id: Option<String>,
    #[serde(default)]
    pub card_number: String,
}

/// POST /checkout — run the full checkout flow for a user.
#[tracing::instrument(skip(state, req))]
pub async fn checkout<C, P>(
    State(state): State<Arc<AppState<C, P>>>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutReceipt>, ApiError>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let user_id = req.user_id.map(UserId::from);
    let details = PaymentDetails {
        card_number: req.card_number,
    };

    let receipt = state.coordinator.checkout(user_id.as_ref(), &details).await?;
    Ok(Json(receipt))
}
