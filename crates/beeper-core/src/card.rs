//! Message cards on the desk and their typewriter reveal

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::message::MessageTheme;

/// Interval between revealed characters
pub const REVEAL_TICK: Duration = Duration::from_millis(50);

/// Unique identifier for a card
///
/// ULIDs are creation-time ordered; the desk draws them from a monotonic
/// generator so two sends in the same millisecond still differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub Ulid);

impl CardId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card_{}", self.0)
    }
}

/// One sent message pinned to the desk
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCard {
    pub id: CardId,
    /// Final uppercase content
    pub text: String,
    /// Human-readable time of send
    pub timestamp: String,
    pub x: f64,
    pub y: f64,
    /// Tilt in degrees, fixed at creation
    pub rotation: f64,
    pub theme: MessageTheme,
}

/// Character-by-character reveal of a card's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    revealed: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            revealed: 0,
            total,
        }
    }

    /// Reveal one more character. Returns false once fully revealed.
    pub fn tick(&mut self) -> bool {
        if self.revealed < self.total {
            self.revealed += 1;
        }
        !self.is_complete()
    }

    /// The part of the text revealed so far
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.total
    }

    /// Start over with new text
    pub fn restart(&mut self, text: impl Into<String>) {
        *self = Self::new(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
