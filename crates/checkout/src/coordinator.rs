//! Checkout coordinator orchestrating the cart → order → payment flow.

use cart::CartStore;
use common::UserId;
use orders::{Order, OrderLedger, OrderStatus};
use serde::{Deserialize, Serialize};

use crate::error::CheckoutError;
use crate::services::payment::{PaymentDetails, PaymentGateway, PaymentReceipt};

/// Outcome of a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    /// The order in its settled state.
    pub order: Order,
    /// The payment receipt backing the settlement.
    pub payment: PaymentReceipt,
}

/// Drives a checkout from cart snapshot to settled order.
///
/// The coordinator runs a fixed sequence: validate the user, snapshot the
/// cart, record a pending order, charge the gateway, then settle. On a
/// declined charge the order is marked `Failed` and the cart is left
/// untouched so the user can retry; the cart is cleared only after the
/// order is recorded as `Paid`.
pub struct CheckoutCoordinator<C, P>
where
    C: CartStore,
    P: PaymentGateway,
{
    cart: C,
    ledger: OrderLedger,
    payment: P,
}

impl<C, P> CheckoutCoordinator<C, P>
where
    C: CartStore,
    P: PaymentGateway,
{
    /// Creates a new checkout coordinator.
    pub fn new(cart: C, ledger: OrderLedger, payment: P) -> Self {
        Self {
            cart,
            ledger,
            payment,
        }
    }

    /// Executes a checkout for the given user.
    ///
    /// `user_id` is `None` when nobody is logged in; that fails fast with
    /// `Unauthenticated` before any state is touched.
    #[tracing::instrument(skip(self, details), fields(user = user_id.map(UserId::as_str)))]
    pub async fn checkout(
        &self,
        user_id: Option<&UserId>,
        details: &PaymentDetails,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        metrics::counter!("checkout_attempts_total").increment(1);
        let start = std::time::Instant::now();

        // 1. Validate the user
        let user_id = user_id.ok_or(CheckoutError::Unauthenticated)?;

        // 2. Snapshot the cart; the order is built from this snapshot, not
        //    from whatever the cart holds later.
        let snapshot = self.cart.get_cart(user_id).await;
        if snapshot.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        // 3. Record a pending order
        let order = self.ledger.create_order(&snapshot, user_id).await;

        // The charge amount comes from the snapshot the order was built
        // from, so the two totals must agree.
        let total: common::Money = snapshot.iter().map(cart::CartItem::line_total).sum();
        debug_assert_eq!(total, order.total);

        // 4. Charge the gateway
        tracing::info!(order_id = %order.id, %total, "authorizing payment");
        match self.payment.authorize(order.id, total, details).await {
            Ok(receipt) => {
                // 5. Settle: mark paid first, then clear the cart. If the
                //    clear is lost the user sees a stale cart, never an
                //    unpaid order.
                let order = self
                    .ledger
                    .set_status(order.id, OrderStatus::Paid)
                    .await
                    .unwrap_or(order);
                self.cart.clear(user_id).await;

                let duration = start.elapsed().as_secs_f64();
                metrics::histogram!("checkout_duration_seconds").record(duration);
                metrics::counter!("checkout_completed").increment(1);
                tracing::info!(order_id = %order.id, txn = %receipt.transaction_id, "checkout completed");

                Ok(CheckoutReceipt {
                    order,
                    payment: receipt,
                })
            }
            Err(e) => {
                // The failed order stays in the ledger; the cart is left
                // intact so the user can retry.
                self.ledger.set_status(order.id, OrderStatus::Failed).await;

                metrics::histogram!("checkout_duration_seconds")
                    .record(start.elapsed().as_secs_f64());
                metrics::counter!("checkout_failed").increment(1);
                tracing::warn!(order_id = %order.id, error = %e, "checkout failed");

                Err(e)
            }
        }
    }

    /// Returns the order ledger backing this coordinator.
    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }
}
