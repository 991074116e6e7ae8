//! ProviderCredentials - Application id/key pair for the nutrition provider

use std::fmt;

/// Credentials loaded once at startup and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    app_id: String,
    app_key: String,
}

impl ProviderCredentials {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }

    /// Build credentials only when both halves are present and non-blank.
    pub fn from_parts(app_id: Option<String>, app_key: Option<String>) -> Option<Self> {
        let app_id = app_id.filter(|v| !v.trim().is_empty())?;
        let app_key = app_key.filter(|v| !v.trim().is_empty())?;
        Some(Self::new(app_id, app_key))
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }
}

// Keep the key out of logs.
impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"***")
            .finish()
    }
}
