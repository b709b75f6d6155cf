//! Rewrite collaborator configuration
//!
//! A single optional credential turns the collaborator on. Everything else
//! has a working default.

use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Settings for the Gemini rewrite client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    /// API key; `None` (or blank) disables the collaborator
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL without trailing `/models/...`
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RewriteConfig {
    /// Set the credential, treating blank strings as absent
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Full `generateContent` URL for the configured model
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconfigured() {
        let config = RewriteConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_blank_key_is_absent() {
        let config = RewriteConfig::default().with_api_key(Some("   ".to_string()));
        assert_eq!(config.api_key, None);
        assert!(!config.is_configured());

        let config = RewriteConfig::default().with_api_key(Some(" abc ".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert!(config.is_configured());
    }

    #[test]
    fn test_generate_url() {
        let config = RewriteConfig::default().with_endpoint("http://localhost:9999/v1beta/");
        assert_eq!(
            config.generate_url(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
