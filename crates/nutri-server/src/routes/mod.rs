//! Nutri API Routes
//!
//! - / - Service banner
//! - /health - Liveness check
//! - /search-food - Food search (Edamam)

pub mod food;
pub mod root;
pub mod swagger;

#[cfg(test)]
mod tests;
