//! Sent messages and their themes

use std::fmt;

use serde::{Deserialize, Serialize};

const URGENT_KEYWORDS: [&str; 3] = ["urgent", "asap", "911"];
const LOVE_KEYWORDS: [&str; 3] = ["love", "heart", "143"];

/// Visual/semantic tag attached to a sent message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageTheme {
    #[default]
    Classic,
    Urgent,
    Love,
}

impl MessageTheme {
    /// Derive the theme from raw draft text.
    ///
    /// Case-insensitive substring match. Urgent keywords are checked first,
    /// so "URGENT LOVE" is urgent.
    pub fn derive(text: &str) -> Self {
        let lower = text.to_lowercase();
        if URGENT_KEYWORDS.iter().any(|k| lower.contains(k)) {
            MessageTheme::Urgent
        } else if LOVE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            MessageTheme::Love
        } else {
            MessageTheme::Classic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageTheme::Classic => "classic",
            MessageTheme::Urgent => "urgent",
            MessageTheme::Love => "love",
        }
    }

    /// CSS modifier class for cards of this theme
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageTheme::Classic => "card--classic",
            MessageTheme::Urgent => "card--urgent",
            MessageTheme::Love => "card--love",
        }
    }
}

impl fmt::Display for MessageTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finalized message emitted by the pager on send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Trimmed, uppercased draft
    pub text: String,
    pub theme: MessageTheme,
}
