//! Edamam Food Database Adapter
//!
//! Calls the `food-database/v2/parser` endpoint and normalizes its hints
//! into `FoodItem`s.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use nutri::{DomainError, FoodItem, FoodQuery, NutritionProvider, ProviderCredentials, MAX_FOOD_ITEMS};

/// Fixed `nutrition-type` parameter.
const NUTRITION_TYPE: &str = "cooking";

/// Edamam implementation of NutritionProvider
pub struct EdamamClient {
    client: Client,
    base_url: String,
}

impl EdamamClient {
    /// Create a client whose every call is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("nutri-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl NutritionProvider for EdamamClient {
    async fn fetch(
        &self,
        query: &FoodQuery,
        credentials: &ProviderCredentials,
    ) -> Result<Vec<FoodItem>, DomainError> {
        tracing::debug!(query = %query, "Querying Edamam parser");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("app_id", credentials.app_id()),
                ("app_key", credentials.app_key()),
                ("ingr", query.as_str()),
                ("nutrition-type", NUTRITION_TYPE),
            ])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(error = %e.without_url(), "Failed to read Edamam error body");
                    "Failed to read error body".to_string()
                }
            };
            tracing::warn!(status = %status, "Edamam rejected the request");
            return Err(DomainError::upstream(status.as_u16(), body));
        }

        let bytes = response.bytes().await.map_err(map_transport_error)?;
        let payload: ParserResponse = serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::Internal(format!("Failed to parse Edamam response: {e}")))?;

        Ok(normalize(payload))
    }
}

// ============================================
// Response Types
// ============================================

#[derive(Debug, Default, Deserialize)]
struct ParserResponse {
    hints: Option<Vec<Hint>>,
}

#[derive(Debug, Deserialize)]
struct Hint {
    food: Option<Food>,
}

#[derive(Debug, Deserialize)]
struct Food {
    #[serde(rename = "foodId")]
    food_id: Option<String>,
    label: Option<String>,
    nutrients: Option<Nutrients>,
}

/// Per-100g nutrients keyed by Edamam nutrient codes.
#[derive(Debug, Default, Deserialize)]
struct Nutrients {
    #[serde(rename = "ENERC_KCAL")]
    energy_kcal: Option<f64>,
    #[serde(rename = "PROCNT")]
    protein: Option<f64>,
    #[serde(rename = "CHOCDF")]
    carbs: Option<f64>,
    #[serde(rename = "FAT")]
    fat: Option<f64>,
}

impl Hint {
    fn into_food_item(self) -> Option<FoodItem> {
        let food = self.food?;
        let nutrients = food.nutrients.unwrap_or_default();

        FoodItem::new(
            food.food_id.unwrap_or_default(),
            food.label.unwrap_or_default(),
            nutrients.energy_kcal.unwrap_or(0.0),
            nutrients.protein.unwrap_or(0.0),
            nutrients.carbs.unwrap_or(0.0),
            nutrients.fat.unwrap_or(0.0),
        )
    }
}

// ============================================
// Helper Functions
// ============================================

/// Cap at the first `MAX_FOOD_ITEMS` hints, then drop unlabeled ones.
fn normalize(payload: ParserResponse) -> Vec<FoodItem> {
    payload
        .hints
        .unwrap_or_default()
        .into_iter()
        .take(MAX_FOOD_ITEMS)
        .filter_map(Hint::into_food_item)
        .collect()
}

fn map_transport_error(err: reqwest::Error) -> DomainError {
    // The request URL carries the app key.
    let err = err.without_url();
    if err.is_builder() {
        DomainError::Internal(format!("Failed to build Edamam request: {err}"))
    } else {
        DomainError::UpstreamUnavailable(err.to_string())
    }
}
