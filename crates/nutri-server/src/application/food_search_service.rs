//! Food Search Application Service (Use Case)
//!
//! Credential-gates and validates a search before handing it to the provider.

use std::sync::Arc;

use nutri::{DomainError, FoodItem, FoodQuery, NutritionProvider, ProviderCredentials};

/// Application service for food searches
pub struct FoodSearchService<P: NutritionProvider> {
    provider: Arc<P>,
    credentials: Option<ProviderCredentials>,
}

impl<P: NutritionProvider> FoodSearchService<P> {
    pub fn new(provider: Arc<P>, credentials: Option<ProviderCredentials>) -> Self {
        Self {
            provider,
            credentials,
        }
    }

    /// Search foods matching `raw_query`.
    ///
    /// Missing credentials fail before the query is even looked at; neither
    /// failure reaches the provider.
    pub async fn search(&self, raw_query: &str) -> Result<Vec<FoodItem>, DomainError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(DomainError::missing_credentials)?;

        let query = FoodQuery::parse(raw_query)?;
        let items = self.provider.fetch(&query, credentials).await?;

        tracing::info!("🥗 Food search: {} -> {} items", query, items.len());

        Ok(items)
    }
}
