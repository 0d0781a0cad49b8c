//! Route handlers grouped by resource.

pub mod cart;
pub mod checkout;
pub mod health;
pub mod metrics;
pub mod orders;
pub mod products;
pub mod ratings;
pub mod users;

use ::cart::CartStore;
use ::checkout::{CheckoutCoordinator, PaymentGateway};
use ::orders::OrderLedger;
use catalog::{ProductCatalog, RatingBoard};

/// Shared application state accessible from all handlers.
pub struct AppState<C: CartStore, P: PaymentGateway> {
    pub cart: C,
    pub catalog: ProductCatalog,
    pub ratings: RatingBoard,
    pub ledger: OrderLedger,
    pub coordinator: CheckoutCoordinator<C, P>,
}
