//! Nutrition Provider Port
//!
//! Abstract interface for the upstream nutrition database.

use async_trait::async_trait;

use crate::domain::{DomainError, FoodItem, FoodQuery, ProviderCredentials};

/// Service interface for looking up foods at the nutrition provider
#[async_trait]
pub trait NutritionProvider: Send + Sync {
    /// Run one lookup and return at most [`MAX_FOOD_ITEMS`](crate::MAX_FOOD_ITEMS)
    /// normalized items in provider order. Zero matches is `Ok(vec![])`.
    ///
    /// Implementations make exactly one outbound call and never retry.
    async fn fetch(
        &self,
        query: &FoodQuery,
        credentials: &ProviderCredentials,
    ) -> Result<Vec<FoodItem>, DomainError>;
}
