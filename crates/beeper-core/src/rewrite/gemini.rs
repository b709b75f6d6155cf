//! Google Gemini `generateContent` client

use serde::{Deserialize, Serialize};

use super::RewriteCollaborator;
use crate::config::RewriteConfig;
use crate::draft::MAX_DRAFT_CHARS;
use crate::error::RewriteError;

/// Rewrite collaborator backed by the Gemini REST API
pub struct GeminiClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client from config.
    ///
    /// # Errors
    /// `NotConfigured` without an API key, `Http` if the client cannot be built.
    pub fn new(config: &RewriteConfig) -> Result<Self, RewriteError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(RewriteError::NotConfigured)?;

        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            url: config.generate_url(),
            api_key,
        })
    }
}

impl RewriteCollaborator for GeminiClient {
    async fn rewrite(&self, text: &str) -> Result<String, RewriteError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(text)),
                }],
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RewriteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| RewriteError::Malformed(e.to_string()))?;

        extract_text(body)
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        "Rewrite the following text into a 90s alphanumeric pager style message.\n\
         Rules:\n\
         1. Use uppercase only.\n\
         2. Keep it brief and punchy.\n\
         3. Use common pager codes if applicable (e.g., 911 for urgent, 143 for I love you, 07734 for Hello).\n\
         4. Do not explain the codes, just output the message.\n\
         5. Maximum {MAX_DRAFT_CHARS} characters.\n\
         \n\
         Input: \"{text}\""
    )
}

/// Concatenate the text parts of the first candidate
fn extract_text(body: GenerateResponse) -> Result<String, RewriteError> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or(RewriteError::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    let text = text.trim();
    if text.is_empty() {
        return Err(RewriteError::EmptyResponse);
    }
    Ok(text.to_string())
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
