//! Product catalog endpoints, enriched with rating summaries.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use cart::CartStore;
use catalog::{Product, RatingSummary};
use checkout::PaymentGateway;
use common::ProductId;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::AppState;

/// A product together with its aggregate rating.
#[derive(Serialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    pub rating: RatingSummary,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Fans out one summary lookup per product, concurrently.
async fn enrich<C, P>(state: &AppState<C, P>, products: Vec<Product>) -> Vec<ProductResponse>
where
    C: CartStore,
    P: PaymentGateway,
{
    let summaries = join_all(products.iter().map(|p| state.ratings.summary(p.id))).await;

    products
        .into_iter()
        .zip(summaries)
        .map(|(product, rating)| ProductResponse { product, rating })
        .collect()
}

/// GET /products — full catalog with rating summaries.
#[tracing::instrument(skip(state))]
pub async fn list<C, P>(State(state): State<Arc<AppState<C, P>>>) -> Json<Vec<ProductResponse>>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let products = state.catalog.list().await;
    Json(enrich(&state, products).await)
}

/// GET /products/search?q= — case-insensitive name search.
#[tracing::instrument(skip(state, params))]
pub async fn search<C, P>(
    State(state): State<Arc<AppState<C, P>>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<ProductResponse>>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let products = state.catalog.search(&params.q).await;
    Json(enrich(&state, products).await)
}

/// GET /products/{id} — one product by ID.
#[tracing::instrument(skip(state))]
pub async fn get<C, P>(
    State(state): State<Arc<AppState<C, P>>>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError>
where
    C: CartStore + 'static,
    P: PaymentGateway + 'static,
{
    let product_id: ProductId = id
        .parse()
        .map_err(|_| ApiError::invalid_input(format!("invalid product id: {id}")))?;

    let product = state
        .catalog
        .get(product_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))?;

    let rating = state.ratings.summary(product_id).await;
    Ok(Json(ProductResponse { product, rating }))
}
