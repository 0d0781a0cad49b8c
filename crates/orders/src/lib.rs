//! Order records and the append-only order ledger.
//!
//! An order is an immutable snapshot of a cart at checkout time; only its
//! status may change afterwards (`Pending` → `Paid` or `Failed`). Orders
//! live in a per-process ledger keyed by user for retrieval.

mod ledger;
mod order;

pub use ledger::OrderLedger;
pub use order::{LineItem, Order, OrderStatus};
