//! HTTP API server with observability for the storefront.
//!
//! Binds the catalog, cart, orders and checkout crates behind a single REST
//! surface, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use cart::{CartStore, InMemoryCartStore};
use catalog::{ProductCatalog, RatingBoard};
use checkout::{CheckoutCoordinator, PaymentGateway, SimulatedPaymentGateway};
use metrics_exporter_prometheus::PrometheusHandle;
use orders::OrderLedger;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<C, P>(state: Arc<AppState<C, P>>, metrics_handle: PrometheusHandle) -> Router
where
    C: CartStore + Clone + 'static,
    P: PaymentGateway + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/cart/{user_id}", get(routes::cart::get_cart::<C, P>))
        .route("/cart", post(routes::cart::add_item::<C, P>))
        .route("/cart", put(routes::cart::update_quantity::<C, P>))
        .route(
            "/cart/{user_id}/{product_id}",
            delete(routes::cart::remove_item::<C, P>),
        )
        .route("/cart/clear/{user_id}", delete(routes::cart::clear::<C, P>))
        .route("/products", get(routes::products::list::<C, P>))
        .route("/products/search", get(routes::products::search::<C, P>))
        .route("/products/{id}", get(routes::products::get::<C, P>))
        .route("/ratings/{product_id}", get(routes::ratings::summary::<C, P>))
        .route("/ratings", post(routes::ratings::add::<C, P>))
        .route("/orders/{user_id}", get(routes::orders::list_for_user::<C, P>))
        .route("/checkout", post(routes::checkout::checkout::<C, P>))
        .route("/users/login", post(routes::users::login))
        .route("/users/current", get(routes::users::current))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state: seeded catalog and ratings, empty
/// cart store and ledger, and the given payment gateway.
pub fn create_default_state(
    payment: SimulatedPaymentGateway,
) -> Arc<AppState<InMemoryCartStore, SimulatedPaymentGateway>> {
    let cart = InMemoryCartStore::new();
    let ledger = OrderLedger::new();
    let coordinator = CheckoutCoordinator::new(cart.clone(), ledger.clone(), payment);

    Arc::new(AppState {
        cart,
        catalog: ProductCatalog::with_seed_data(),
        ratings: RatingBoard::with_seed_data(),
        ledger,
        coordinator,
    })
}
