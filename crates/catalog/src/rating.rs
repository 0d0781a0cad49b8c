//! Product rating board.

use std::sync::Arc;

use common::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A single review score left by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub product_id: ProductId,
    pub user_id: UserId,
    pub score: f64,
    #[serde(default)]
    pub comment: String,
}

impl Rating {
    /// Creates a rating.
    pub fn new(
        product_id: impl Into<ProductId>,
        user_id: impl Into<UserId>,
        score: f64,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            user_id: user_id.into(),
            score,
            comment: comment.into(),
        }
    }
}

/// Aggregated rating for one product.
///
/// `average` is `None` when the product has no ratings yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub product_id: ProductId,
    pub average: Option<f64>,
    pub count: usize,
}

/// In-memory, append-only rating store.
#[derive(Clone, Default)]
pub struct RatingBoard {
    ratings: Arc<RwLock<Vec<Rating>>>,
}

impl RatingBoard {
    /// Creates an empty rating board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board pre-loaded with the demo reviews.
    pub fn with_seed_data() -> Self {
        let ratings = vec![
            Rating::new(1u64, "1", 4.5, "Great laptop!"),
            Rating::new(1u64, "2", 4.0, "Good value"),
            Rating::new(2u64, "3", 3.5, "Average quality"),
        ];
        Self {
            ratings: Arc::new(RwLock::new(ratings)),
        }
    }

    /// Records a rating.
    pub async fn add(&self, rating: Rating) {
        self.ratings.write().await.push(rating);
    }

    /// Returns the aggregate rating for a product.
    ///
    /// The average is rounded to one decimal place.
    pub async fn summary(&self, product_id: ProductId) -> RatingSummary {
        let ratings = self.ratings.read().await;
        let scores: Vec<f64> = ratings
            .iter()
            .filter(|r| r.product_id == product_id)
            .map(|r| r.score)
            .collect();

        if scores.is_empty() {
            return RatingSummary {
                product_id,
                average: None,
                count: 0,
            };
        }

        let avg = scores.iter().sum::<f64>() / scores.len() as f64;
        RatingSummary {
            product_id,
            average: Some((avg * 10.0).round() / 10.0),
            count: scores.len(),
        }
    }

    /// Returns the total number of ratings on the board.
    pub async fn rating_count(&self) -> usize {
        self.ratings.read().await.len()
    }
}
