//! Product catalog and rating board.
//!
//! Read-mostly reference data for the storefront: an in-memory product
//! catalog with name search, and a rating board that aggregates per-product
//! review scores.

mod product;
mod rating;

pub use product::{Product, ProductCatalog};
pub use rating::{Rating, RatingBoard, RatingSummary};
