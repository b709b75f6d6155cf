//! Error types for Beeper

use thiserror::Error;

use crate::pager::PagerStatus;

/// Reasons a pager command was refused.
///
/// None of these are failures in the usual sense: the command simply has
/// no effect and the pager state is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagerError {
    /// The device is switched off
    #[error("Pager is powered off")]
    PoweredOff,

    /// Another operation is in flight
    #[error("Pager is busy: {status}")]
    Busy { status: PagerStatus },

    /// Nothing but whitespace in the draft
    #[error("Draft is empty")]
    EmptyDraft,
}

/// Errors raised at the rewrite collaborator boundary
#[derive(Error, Debug)]
pub enum RewriteError {
    /// No credential was supplied
    #[error("Rewrite service not configured")]
    NotConfigured,

    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service answered but produced no text
    #[error("Empty response from rewrite service")]
    EmptyResponse,

    /// The response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Result type alias using PagerError
pub type PagerResult<T> = Result<T, PagerError>;
