//! External service integrations used by the checkout flow.

pub mod payment;

pub use payment::{
    PaymentDetails, PaymentGateway, PaymentReceipt, PaymentStatus, SimulatedPaymentGateway,
};
