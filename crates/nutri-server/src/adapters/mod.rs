//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod edamam;

// Re-exports
pub use edamam::EdamamClient;
