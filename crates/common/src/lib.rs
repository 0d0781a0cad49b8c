//! Shared value types for the storefront system.
//!
//! Identifier newtypes, the `Money` value object, and the `User` record
//! used across the cart, order, and checkout crates.

mod money;
mod types;

pub use money::Money;
pub use types::{OrderId, ProductId, TransactionId, User, UserId};
