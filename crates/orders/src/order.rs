//! Order record and status machine.

use cart::CartItem;
use chrono::{DateTime, Utc};
use common::{Money, OrderId, ProductId, UserId};
use serde::{Deserialize, Serialize};

/// Status of an order.
///
/// Orders start `Pending` and move to exactly one of `Paid` or `Failed`
/// depending on the payment outcome. Both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Created, payment not yet settled.
    #[default]
    Pending,

    /// Payment authorized.
    Paid,

    /// Payment declined or errored.
    Failed,
}

impl OrderStatus {
    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of an order, denormalized from the cart at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price in cents.
    pub price: Money,
}

impl LineItem {
    /// Returns the total price for this line.
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

impl From<&CartItem> for LineItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id,
            product_name: item.product.name.clone(),
            quantity: item.quantity,
            price: item.product.price,
        }
    }
}

/// An immutable record of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<LineItem>,
    /// Exact sum of `price × quantity` over all lines.
    pub total: Money,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order from a cart snapshot.
    ///
    /// Callers must pass a non-empty snapshot; the checkout flow rejects
    /// empty carts before reaching this point.
    pub fn from_cart(items: &[CartItem], user_id: &UserId) -> Self {
        let lines: Vec<LineItem> = items.iter().map(LineItem::from).collect();
        let total: Money = lines.iter().map(LineItem::line_total).sum();

        Self {
            id: OrderId::generate(),
            user_id: user_id.clone(),
            items: lines,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
