//! Checkout error types.

use thiserror::Error;

/// Errors raised by the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// No user identity was supplied with the checkout request.
    #[error("please login to checkout")]
    Unauthenticated,

    /// The user's cart held no items at checkout time.
    #[error("your cart is empty")]
    EmptyCart,

    /// The payment gateway declined or failed the charge.
    #[error("payment failed: {reason}")]
    PaymentFailed { reason: String },
}

impl CheckoutError {
    /// Creates a payment failure with the given reason.
    pub fn payment_failed(reason: impl Into<String>) -> Self {
        Self::PaymentFailed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            CheckoutError::Unauthenticated.to_string(),
            "please login to checkout"
        );
        assert_eq!(CheckoutError::EmptyCart.to_string(), "your cart is empty");
        assert_eq!(
            CheckoutError::payment_failed("card declined").to_string(),
            "payment failed: card declined"
        );
    }
}
