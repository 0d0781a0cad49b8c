//! Product rating endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use cart::CartStore;
use catalog::{Rating, RatingSummary};
use checkout::PaymentGateway;
use common::{ProductId, UserId};
use serde::Deserialize;

use crate::error::ApiError;
use crate::routes::AppState;

#[derive(Deserialize)]
pub struct AddRatingRequest {
    pub product_id: Option<u64>,
    pub user_id: Option<String>,
    pub score: Option<f64>,
    #[serde(default)]
    pub comment: String,
}

/// GET /ratings/{product_id} — aggregate rating for a product.
#[tracing::instrument(skip(state))]
pub async fn summary<C, P>(
    State(state): State<Arc<AppState<C, P>>>,
    Path(product_id): Path<String>,
) -> Result<Json<RatingSummary>, ApiError>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let product_id: ProductId = product_id
        .parse()
        .map_err(|_| ApiError::invalid_input(format!("invalid product id: {product_id}")))?;

    Ok(Json(state.ratings.summary(product_id).await))
}

/// POST /ratings — record a rating.
#[tracing::instrument(skip(state, req))]
pub async fn add<C, P>(
    State(state): State<Arc<AppState<C, P>>>,
    Json(req): Json<AddRatingRequest>,
) -> Result<(StatusCode, Json<RatingSummary>), ApiError>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let (Some(product_id), Some(user_id), Some(score)) = (req.product_id, req.user_id, req.score)
    else {
        return Err(ApiError::invalid_input(
            "product_id, user_id and score are required",
        ));
    };

    let rating = Rating::new(product_id, UserId::from(user_id), score, req.comment);
    state.ratings.add(rating).await;

    let summary = state.ratings.summary(ProductId::new(product_id)).await;
    Ok((StatusCode::CREATED, Json(summary)))
}
