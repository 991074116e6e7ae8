//! Food Routes - Nutrition lookup via Edamam

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use utoipa::IntoParams;

use nutri::FoodItem;

use crate::error::{ApiError, ErrorBody};
use crate::AppState;

/// Search parameters
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchFoodParams {
    /// Free-text food query, e.g. "rice" (at least 1 non-whitespace character)
    pub query: Option<String>,
}

impl SearchFoodParams {
    /// Collect from raw key/value pairs. A repeated `query` keeps its last value.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .filter(|(key, _)| key == "query")
            .map(|(_, value)| value)
            .last();

        Self { query }
    }
}

/// Search foods and return per-100g macros
#[utoipa::path(
    get,
    path = "/search-food",
    params(SearchFoodParams),
    responses(
        (status = 200, description = "Matching foods (at most 20, possibly empty)", body = Vec<FoodItem>),
        (status = 422, description = "Missing or empty query", body = ErrorBody),
        (status = 500, description = "Credentials not configured or internal error", body = ErrorBody),
        (status = 503, description = "Edamam unreachable or timed out", body = ErrorBody)
    ),
    tag = "Food"
)]
pub async fn search_food(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<FoodItem>>, ApiError> {
    let params = SearchFoodParams::from_pairs(pairs);
    let items = state
        .food_search
        .search(params.query.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(items))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/search-food", get(search_food))
}
