//! The draft buffer held by the pager.
//!
//! Length is measured in chars, so a multi-byte character counts once and the
//! buffer is never cut inside a code point.

use std::fmt;

/// Hard cap on draft length, enforced on every edit
pub const MAX_DRAFT_CHARS: usize = 60;

/// In-progress, not-yet-sent message text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer, truncating to [`MAX_DRAFT_CHARS`].
    ///
    /// Returns the resulting length in chars.
    pub fn set(&mut self, value: &str) -> usize {
        self.text = match value.char_indices().nth(MAX_DRAFT_CHARS) {
            Some((cut, _)) => value[..cut].to_string(),
            None => value.to_string(),
        };
        self.len()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when nothing but whitespace is present
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The text as it goes out on send: trimmed and uppercased
    pub fn finalized(&self) -> String {
        self.text.trim().to_uppercase()
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_within_cap() {
        let mut draft = Draft::new();
        assert_eq!(draft.set("pick up milk"), 12);
        assert_eq!(draft.as_str(), "pick up milk");
    }

    #[test]
    fn test_set_truncates_to_cap() {
        let mut draft = Draft::new();
        let long = "x".repeat(75);
        assert_eq!(draft.set(&long), MAX_DRAFT_CHARS);
        assert_eq!(draft.as_str(), &long[..MAX_DRAFT_CHARS]);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let mut draft = Draft::new();
        let hearts = "♥".repeat(61);
        draft.set(&hearts);
        assert_eq!(draft.len(), MAX_DRAFT_CHARS);
        assert!(draft.as_str().chars().all(|c| c == '♥'));
    }

    #[test]
    fn test_blank_and_finalized() {
        let mut draft = Draft::new();
        draft.set("   ");
        assert!(draft.is_blank());
        assert!(!draft.is_empty());

        draft.set("  call me  ");
        assert!(!draft.is_blank());
        assert_eq!(draft.finalized(), "CALL ME");
    }

    #[test]
    fn test_clear() {
        let mut draft = Draft::new();
        draft.set("hello");
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft.len(), 0);
    }
}
