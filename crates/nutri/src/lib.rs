//! Nutri Domain Library
//!
//! Core domain types and interfaces for the Nutri food search proxy.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types with no transport dependencies
//!   - `entities/`: Normalized output records (FoodItem)
//!   - `value_objects/`: Validated inputs (FoodQuery, ProviderCredentials)
//!   - `errors/`: The error taxonomy shared by every layer
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `NutritionProvider`: the upstream nutrition database
//!
//! # Usage
//!
//! ```rust,ignore
//! use nutri::{FoodQuery, NutritionProvider, ProviderCredentials};
//!
//! let query = FoodQuery::parse("rice")?;
//! let items = provider.fetch(&query, &credentials).await?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, FoodItem, FoodQuery, ProviderCredentials, MAX_FOOD_ITEMS};
pub use ports::NutritionProvider;
