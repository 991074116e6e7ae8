//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and the nutrition provider.

mod food_search_service;

pub use food_search_service::FoodSearchService;
