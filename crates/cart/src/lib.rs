//! Per-user shopping cart store.
//!
//! A cart is an ordered list of product/quantity pairs keyed by user.
//! Adding an existing product merges quantities rather than duplicating the
//! entry, so a cart holds at most one line per product ID. Carts are created
//! lazily on first add, emptied by `clear` (or a successful checkout), and
//! live for the lifetime of the process.
//!
//! The in-memory implementation serializes mutations per user while letting
//! distinct users proceed in parallel.

mod item;
mod store;

pub use item::CartItem;
pub use store::{CartStore, InMemoryCartStore};
