//! Payment gateway trait and simulated implementation.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use common::{Money, OrderId, TransactionId};
use serde::{Deserialize, Serialize};

use crate::error::CheckoutError;

/// Card details presented at checkout.
///
/// Only the card number is carried; the gateway is simulated and never
/// validates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentDetails {
    #[serde(default)]
    pub card_number: String,
}

/// Settlement state of a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Declined,
}

/// Outcome of an authorized charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub success: bool,
    pub transaction_id: TransactionId,
    pub order_id: OrderId,
    pub amount: Money,
    pub status: PaymentStatus,
}

/// Trait for payment authorization.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Authorizes a charge for an order.
    async fn authorize(
        &self,
        order_id: OrderId,
        amount: Money,
        details: &PaymentDetails,
    ) -> Result<PaymentReceipt, CheckoutError>;
}

#[derive(Debug, Default)]
struct SimulatedGatewayState {
    transactions: Vec<PaymentReceipt>,
    fail_on_authorize: bool,
}

/// Simulated payment gateway.
///
/// Every charge succeeds unless the failure toggle is set. An optional
/// settlement delay mimics a slow upstream processor; the delay elapses
/// before any internal state is touched.
#[derive(Debug, Clone, Default)]
pub struct SimulatedPaymentGateway {
    delay: Duration,
    state: Arc<RwLock<SimulatedGatewayState>>,
}

impl SimulatedPaymentGateway {
    /// Creates a gateway that settles immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway that waits `delay` before settling each charge.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Configures the gateway to decline subsequent charges.
    pub fn set_fail_on_authorize(&self, fail: bool) {
        self.state.write().unwrap().fail_on_authorize = fail;
    }

    /// Returns the number of settled charges.
    pub fn authorized_count(&self) -> usize {
        self.state.read().unwrap().transactions.len()
    }

    /// Returns true if a charge settled with the given transaction ID.
    pub fn has_transaction(&self, transaction_id: &TransactionId) -> bool {
        self.state
            .read()
            .unwrap()
            .transactions
            .iter()
            .any(|r| &r.transaction_id == transaction_id)
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn authorize(
        &self,
        order_id: OrderId,
        amount: Money,
        _details: &PaymentDetails,
    ) -> Result<PaymentReceipt, CheckoutError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut state = self.state.write().unwrap();

        if state.fail_on_authorize {
            return Err(CheckoutError::payment_failed("card declined"));
        }

        let receipt = PaymentReceipt {
            success: true,
            transaction_id: TransactionId::generate(),
            order_id,
            amount,
            status: PaymentStatus::Completed,
        };
        state.transactions.push(receipt.clone());

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn authorize_settles_and_records() {
        let gateway = SimulatedPaymentGateway::new();
        let order_id = OrderId::from_millis(1);

        let receipt = gateway
            .authorize(order_id, Money::from_cents(5000), &PaymentDetails::default())
            .await
            .unwrap();

        assert!(receipt.success);
        assert_eq!(receipt.status, PaymentStatus::Completed);
        assert_eq!(receipt.order_id, order_id);
        assert_eq!(receipt.amount.cents(), 5000);
        assert!(receipt.transaction_id.as_str().starts_with("txn_"));
        assert_eq!(gateway.authorized_count(), 1);
        assert!(gateway.has_transaction(&receipt.transaction_id));
    }

    #[tokio::test]
    async fn fail_toggle_declines_charge() {
        let gateway = SimulatedPaymentGateway::new();
        gateway.set_fail_on_authorize(true);

        let result = gateway
            .authorize(
                OrderId::from_millis(1),
                Money::from_cents(5000),
                &PaymentDetails::default(),
            )
            .await;

        assert!(matches!(result, Err(CheckoutError::PaymentFailed { .. })));
        assert_eq!(gateway.authorized_count(), 0);
    }

    #[tokio::test]
    async fn transaction_ids_are_unique_across_charges() {
        let gateway = SimulatedPaymentGateway::new();
        let details = PaymentDetails::default();

        let r1 = gateway
            .authorize(OrderId::from_millis(1), Money::from_cents(100), &details)
            .await
            .unwrap();
        let r2 = gateway
            .authorize(OrderId::from_millis(2), Money::from_cents(200), &details)
            .await
            .unwrap();

        assert_ne!(r1.transaction_id, r2.transaction_id);
        assert_eq!(gateway.authorized_count(), 2);
    }

    #[tokio::test]
    async fn delay_elapses_before_settlement() {
        tokio::time::pause();
        let gateway = SimulatedPaymentGateway::with_delay(Duration::from_millis(1500));
        let details = PaymentDetails::default();

        let start = tokio::time::Instant::now();
        gateway
            .authorize(OrderId::from_millis(1), Money::from_cents(100), &details)
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(gateway.authorized_count(), 1);
    }
}
