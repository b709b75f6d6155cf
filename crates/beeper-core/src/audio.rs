//! Audio feedback cues.
//!
//! The pager beeps on every interaction. This module fixes which event
//! produces which tones and in what order; actually making noise is left to
//! a [`ToneSink`] supplied by the host.

/// A single square-wave beep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl Tone {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}

/// A tone plus its start offset relative to the cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTone {
    pub offset_ms: u32,
    pub tone: Tone,
}

/// Gap between the two beeps of the "sent" confirmation
const SENT_ECHO_GAP_MS: u32 = 150;

/// Feedback events emitted by the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// One edit of the draft; pitch rises with length
    Keystroke { len: usize },
    RephraseStart,
    RephraseSuccess,
    SendStart,
    /// Double beep once the transmission delay has elapsed
    SendComplete,
    PowerToggle,
}

impl Cue {
    /// The tones this cue plays, in start order
    pub fn tones(&self) -> Vec<ScheduledTone> {
        let now = |tone| ScheduledTone { offset_ms: 0, tone };
        match *self {
            Cue::Keystroke { len } => {
                let len = u32::try_from(len).unwrap_or(u32::MAX / 10);
                vec![now(Tone::new(800 + len.saturating_mul(10), 10))]
            }
            Cue::RephraseStart => vec![now(Tone::new(600, 50))],
            Cue::RephraseSuccess => vec![now(Tone::new(1500, 200))],
            Cue::SendStart => vec![now(Tone::new(1200, 150))],
            Cue::SendComplete => vec![
                now(Tone::new(1200, 100)),
                ScheduledTone {
                    offset_ms: SENT_ECHO_GAP_MS,
                    tone: Tone::new(1200, 100),
                },
            ],
            Cue::PowerToggle => vec![now(Tone::new(400, 300))],
        }
    }
}

/// Something that can turn cues into sound
pub trait ToneSink: Send + Sync {
    fn sound(&self, cue: Cue);
}

/// Sink that drops every cue (headless runs, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl ToneSink for SilentSink {
    fn sound(&self, cue: Cue) {
        tracing::trace!(?cue, "silent sink");
    }
}
