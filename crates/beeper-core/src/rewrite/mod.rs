//! Rewrite collaborator boundary
//!
//! ```text
//! Rewriter
//! ├── unconfigured → uppercase fallback (warns, never errors)
//! └── configured   → RewriteCollaborator (GeminiClient)
//!                    └── failure → RewriteError, pager shows ERR_01
//! ```

mod gemini;

use std::future::Future;

pub use gemini::GeminiClient;

use crate::config::RewriteConfig;
use crate::error::RewriteError;

/// An external service that restyles draft text into pager slang
pub trait RewriteCollaborator: Send + Sync {
    fn rewrite(&self, text: &str) -> impl Future<Output = Result<String, RewriteError>> + Send;
}

/// Deterministic local transform used when no collaborator is configured
pub fn local_fallback(text: &str) -> String {
    text.to_uppercase()
}

/// Front door for rephrasing; hides whether a collaborator is present
pub struct Rewriter<C = GeminiClient> {
    collaborator: Option<C>,
}

impl<C: RewriteCollaborator> Rewriter<C> {
    pub fn new(collaborator: C) -> Self {
        Self {
            collaborator: Some(collaborator),
        }
    }

    /// A rewriter that always uses the local fallback
    pub fn unconfigured() -> Self {
        Self { collaborator: None }
    }

    pub fn is_configured(&self) -> bool {
        self.collaborator.is_some()
    }

    /// Rephrase `text`.
    ///
    /// Without a collaborator this is the uppercase fallback and always
    /// succeeds. With one, failures are returned so the caller can show its
    /// error state.
    pub async fn rephrase(&self, text: &str) -> Result<String, RewriteError> {
        let Some(collaborator) = &self.collaborator else {
            tracing::warn!("rewrite service not configured, using local fallback");
            return Ok(local_fallback(text));
        };

        match collaborator.rewrite(text).await {
            Ok(rewritten) => {
                tracing::debug!(input = text, output = %rewritten, "rephrased");
                Ok(rewritten)
            }
            Err(e) => {
                tracing::error!(error = %e, "rewrite service call failed");
                Err(e)
            }
        }
    }
}

impl Rewriter<GeminiClient> {
    /// Build from config. A missing key, or a client that cannot be built,
    /// yields an unconfigured rewriter.
    pub fn from_config(config: &RewriteConfig) -> Self {
        if !config.is_configured() {
            tracing::warn!("no API key supplied, rephrase will only uppercase");
            return Self::unconfigured();
        }

        match GeminiClient::new(config) {
            Ok(client) => {
                tracing::info!(model = %config.model, "rewrite service enabled");
                Self::new(client)
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not build rewrite client, using local fallback");
                Self::unconfigured()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl RewriteCollaborator for Echo {
        async fn rewrite(&self, text: &str) -> Result<String, RewriteError> {
            Ok(format!("{} 143", text.to_uppercase()))
        }
    }

    struct Broken;

    impl RewriteCollaborator for Broken {
        async fn rewrite(&self, _text: &str) -> Result<String, RewriteError> {
            Err(RewriteError::Api {
                status: 500,
                message: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_unconfigured_uppercases() {
        let rewriter: Rewriter = Rewriter::unconfigured();
        assert!(!rewriter.is_configured());
        assert_eq!(rewriter.rephrase("miss you").await.unwrap(), "MISS YOU");
    }

    #[tokio::test]
    async fn test_configured_delegates() {
        let rewriter = Rewriter::new(Echo);
        assert_eq!(rewriter.rephrase("miss you").await.unwrap(), "MISS YOU 143");
    }

    #[tokio::test]
    async fn test_failure_is_returned() {
        let rewriter = Rewriter::new(Broken);
        let err = rewriter.rephrase("miss you").await.unwrap_err();
        assert!(matches!(err, RewriteError::Api { status: 500, .. }));
    }

    #[test]
    fn test_from_config_without_key() {
        let rewriter = Rewriter::from_config(&RewriteConfig::default());
        assert!(!rewriter.is_configured());
    }

    #[test]
    fn test_from_config_with_key() {
        let config = RewriteConfig::default().with_api_key(Some("test-key".to_string()));
        let rewriter = Rewriter::from_config(&config);
        assert!(rewriter.is_configured());
    }
}
