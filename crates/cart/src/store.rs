//! Cart store trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use catalog::Product;
use common::{ProductId, UserId};
use tokio::sync::{Mutex, RwLock};

use crate::item::CartItem;

/// Storage interface for per-user carts.
///
/// Every mutation returns a snapshot of the resulting cart, so callers never
/// observe intermediate state and never hold a reference into the store.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Returns the user's cart; empty for users never seen before.
    async fn get_cart(&self, user: &UserId) -> Vec<CartItem>;

    /// Adds `quantity` of `product` to the user's cart.
    ///
    /// If a line with the same product ID exists its quantity is incremented
    /// (saturating at `u32::MAX`); otherwise a new line is appended. Additive
    /// on every call, so repeated adds keep growing the quantity.
    async fn add_item(&self, user: &UserId, product: Product, quantity: u32) -> Vec<CartItem>;

    /// Overwrites the quantity of an existing line.
    ///
    /// No-op (still returning the current cart) when the user or the line
    /// does not exist. A quantity of 0 is stored as-is rather than removing
    /// the line; guarding against it is the caller's job.
    async fn set_quantity(
        &self,
        user: &UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Vec<CartItem>;

    /// Removes every line matching `product_id`. No-op when absent.
    async fn remove_item(&self, user: &UserId, product_id: ProductId) -> Vec<CartItem>;

    /// Empties the user's cart. Idempotent, and valid for unknown users.
    async fn clear(&self, user: &UserId) -> Vec<CartItem>;
}

/// In-memory cart store.
///
/// Each user's cart sits behind its own mutex, so concurrent mutations for
/// one user serialize instead of racing, while unrelated users are only
/// coupled through the brief outer map lock. Cheap to clone; clones share
/// the backing store.
#[derive(Clone, Default)]
pub struct InMemoryCartStore {
    carts: Arc<RwLock<HashMap<UserId, Arc<Mutex<Vec<CartItem>>>>>>,
}

impl InMemoryCartStore {
    /// Creates a new empty cart store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the user's cart slot, creating it if needed.
    async fn slot(&self, user: &UserId) -> Arc<Mutex<Vec<CartItem>>> {
        // Fast path: the slot already exists.
        {
            let carts = self.carts.read().await;
            if let Some(slot) = carts.get(user) {
                return slot.clone();
            }
        }
        let mut carts = self.carts.write().await;
        carts.entry(user.clone()).or_default().clone()
    }

    /// Returns the number of users with a cart slot (test/diagnostic helper).
    pub async fn user_count(&self) -> usize {
        self.carts.read().await.len()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn get_cart(&self, user: &UserId) -> Vec<CartItem> {
        let slot = {
            let carts = self.carts.read().await;
            carts.get(user).cloned()
        };
        match slot {
            Some(slot) => slot.lock().await.clone(),
            None => Vec::new(),
        }
    }

    async fn add_item(&self, user: &UserId, product: Product, quantity: u32) -> Vec<CartItem> {
        let slot = self.slot(user).await;
        let mut items = slot.lock().await;

        if let Some(existing) = items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            items.push(CartItem::new(product, quantity));
        }

        tracing::debug!(%user, lines = items.len(), "cart item added");
        items.clone()
    }

    async fn set_quantity(
        &self,
        user: &UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Vec<CartItem> {
        let slot = {
            let carts = self.carts.read().await;
            carts.get(user).cloned()
        };
        let Some(slot) = slot else {
            return Vec::new();
        };

        let mut items = slot.lock().await;
        if let Some(item) = items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
        items.clone()
    }

    async fn remove_item(&self, user: &UserId, product_id: ProductId) -> Vec<CartItem> {
        let slot = {
            let carts = self.carts.read().await;
            carts.get(user).cloned()
        };
        let Some(slot) = slot else {
            return Vec::new();
        };

        let mut items = slot.lock().await;
        items.retain(|i| i.product.id != product_id);
        items.clone()
    }

    async fn clear(&self, user: &UserId) -> Vec<CartItem> {
        let slot = self.slot(user).await;
        slot.lock().await.clear();
        tracing::debug!(%user, "cart cleared");
        Vec::new()
    }
}
