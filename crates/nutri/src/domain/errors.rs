//! Domain Errors
//!
//! Every failure a food search can end in. Each variant is terminal for the
//! request it belongs to and maps to exactly one response status.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// The caller supplied an unusable query.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Provider credentials are missing from the process configuration.
    #[error("Misconfigured: {0}")]
    Misconfigured(String),

    /// The provider answered with a non-success status.
    #[error("Upstream provider error ({status}): {body}")]
    UpstreamError { status: u16, body: String },

    /// The provider could not be reached (connect, DNS, reset, timeout).
    #[error("Upstream provider unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Anything else: malformed provider payloads, client setup failures.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn upstream<T: Into<String>>(status: u16, body: T) -> Self {
        Self::UpstreamError {
            status,
            body: body.into(),
        }
    }

    pub fn missing_credentials() -> Self {
        Self::Misconfigured(
            "Provider credentials not configured. Please set EDAMAM_APP_ID and EDAMAM_APP_KEY environment variables."
                .to_string(),
        )
    }
}
