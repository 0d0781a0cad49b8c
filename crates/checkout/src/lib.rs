//! Checkout orchestration for the storefront.
//!
//! This crate drives the checkout flow as a fixed sequence of steps:
//! 1. Validate the user
//! 2. Snapshot the cart
//! 3. Record a pending order
//! 4. Authorize payment
//! 5. Settle: mark the order paid, then clear the cart
//!
//! A declined payment marks the order `Failed` and leaves the cart intact
//! so the user can retry.

pub mod coordinator;
pub mod error;
pub mod services;

pub use coordinator::{CheckoutCoordinator, CheckoutReceipt};
pub use error::CheckoutError;
pub use services::payment::{
    PaymentDetails, PaymentGateway, PaymentReceipt, PaymentStatus, SimulatedPaymentGateway,
};
