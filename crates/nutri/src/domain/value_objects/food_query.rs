//! FoodQuery - A validated free-text food search

use std::fmt;

use crate::domain::errors::DomainError;

/// Search text that is guaranteed to be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodQuery(String);

impl FoodQuery {
    /// Trim the raw input and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidArgument(
                "query must contain at least 1 non-whitespace character".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
