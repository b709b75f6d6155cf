//! Beeper Core Library
//!
//! Everything behind the virtual pager that is not pixels: the draft buffer,
//! the pager status machine, the rewrite collaborator boundary, and the desk
//! of message cards.
//!
//! ## Overview
//!
//! ```text
//! keystroke / button ──▶ Pager ──(rephrase)──▶ Rewriter ──▶ Gemini
//!                          │
//!                          └──(send)──▶ SentMessage ──▶ Desk ──▶ MessageCard
//! ```
//!
//! The UI owns timers and rendering; this crate owns the rules. Timed flows
//! (send delay, error display) live in [`pager::driver`] so they can be
//! exercised under tokio's paused clock.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use beeper_core::{pager::driver, Desk, Pager, RewriteConfig, Rewriter, SilentSink, Viewport};
//! use parking_lot::Mutex;
//!
//! let mut pager = Arc::new(Mutex::new(Pager::new()));
//! pager.lock().edit("need help asap");
//!
//! let rewriter = Rewriter::from_config(&RewriteConfig::default());
//! driver::rephrase(&mut pager, &rewriter, &SilentSink).await?;
//!
//! if let Some(sent) = driver::send(&mut pager, &SilentSink).await? {
//!     let mut desk = Desk::new();
//!     let card = desk.spawn(sent, Viewport::default(), &mut rand::rng(), chrono::Local::now());
//!     println!("{} [{}]", card.text, card.theme);
//! }
//! ```

pub mod audio;
pub mod card;
pub mod config;
pub mod desk;
pub mod drag;
pub mod draft;
pub mod error;
pub mod message;
pub mod pager;
pub mod rewrite;

// Re-exports
pub use audio::{Cue, ScheduledTone, SilentSink, Tone, ToneSink};
pub use card::{CardId, MessageCard, Typewriter, REVEAL_TICK};
pub use config::RewriteConfig;
pub use desk::{Desk, Viewport};
pub use drag::{Bounds, DragSession, Point, DRAG_ELASTIC};
pub use draft::{Draft, MAX_DRAFT_CHARS};
pub use error::{PagerError, PagerResult, RewriteError};
pub use message::{MessageTheme, SentMessage};
pub use pager::{
    Pager, PagerCell, PagerStatus, RecoveryTicket, RephraseResolution, RephraseTicket,
    SendTicket, ERROR_DISPLAY, SEND_DELAY,
};
pub use rewrite::{GeminiClient, RewriteCollaborator, Rewriter};
