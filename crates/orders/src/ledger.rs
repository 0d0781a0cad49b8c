//! Append-only order ledger.

use std::sync::Arc;

use cart::CartItem;
use common::{OrderId, UserId};
use tokio::sync::RwLock;

use crate::order::{Order, OrderStatus};

/// Per-process ledger of every order ever created.
///
/// Append-only: entries are never removed, and the only mutation allowed
/// after creation is the status transition. Cheap to clone; clones share
/// the backing store.
#[derive(Clone, Default)]
pub struct OrderLedger {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl OrderLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a `Pending` order from a cart snapshot and appends it.
    ///
    /// Does not touch the cart; the caller owns the snapshot.
    pub async fn create_order(&self, snapshot: &[CartItem], user_id: &UserId) -> Order {
        let order = Order::from_cart(snapshot, user_id);
        self.orders.write().await.push(order.clone());
        tracing::info!(order_id = %order.id, user = %user_id, total = %order.total, "order created");
        order
    }

    /// Looks up an order by ID.
    pub async fn get(&self, order_id: OrderId) -> Option<Order> {
        self.orders
            .read()
            .await
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
    }

    /// Returns all orders for a user, oldest first.
    pub async fn orders_for(&self, user_id: &UserId) -> Vec<Order> {
        self.orders
            .read()
            .await
            .iter()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Transitions an order's status; the one permitted mutation.
    ///
    /// Returns the updated order, or `None` if the ID is unknown.
    pub async fn set_status(&self, order_id: OrderId, status: OrderStatus) -> Option<Order> {
        let mut orders = self.orders.write().await;
        let order = orders.iter_mut().find(|o| o.id == order_id)?;
        order.status = status;
        Some(order.clone())
    }

    /// Returns the total number of orders recorded.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}
