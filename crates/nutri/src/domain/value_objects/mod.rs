//! Value Objects
//!
//! Immutable, validated values constructed at the edge of the system.

mod credentials;
mod food_query;

pub use credentials::*;
pub use food_query::*;
