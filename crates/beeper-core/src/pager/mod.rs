//! Pager device state machine
//!
//! ## Status transitions
//!
//! ```text
//! ┌──────┐ rephrase ┌────────────┐  collaborator failed  ┌───────┐
//! │ Idle │─────────▶│ Processing │──────────────────────▶│ Error │
//! │      │◀─────────│            │                       │       │
//! │      │  success └────────────┘                       │       │
//! │      │◀──────────────────────────────────────────────│       │
//! │      │                ERROR_DISPLAY elapsed          └───────┘
//! │      │   send   ┌─────────┐
//! │      │─────────▶│ Sending │
//! │      │◀─────────│         │
//! └──────┘SEND_DELAY└─────────┘
//!
//! power toggle: any ──▶ Idle (in-flight tickets become stale)
//! ```
//!
//! Commands that start an operation hand back a ticket. The ticket must be
//! presented to finish the operation; a power toggle in between bumps the
//! pager's epoch and the late result is discarded. That keeps "one operation
//! in flight" true even after a forced reset.

pub mod driver;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::audio::Cue;
use crate::draft::Draft;
use crate::error::{PagerError, PagerResult, RewriteError};
use crate::message::{MessageTheme, SentMessage};

/// Simulated transmission time between the send command and the send event
pub const SEND_DELAY: Duration = Duration::from_millis(800);

/// How long the error status stays on screen before recovering
pub const ERROR_DISPLAY: Duration = Duration::from_secs(2);

/// What the pager is currently doing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PagerStatus {
    #[default]
    Idle,
    Processing,
    Sending,
    Error,
}

impl PagerStatus {
    /// Label shown on the LCD status bar
    pub fn label(&self) -> &'static str {
        match self {
            PagerStatus::Idle => "READY",
            PagerStatus::Processing => "ENCRYPTING...",
            PagerStatus::Sending => "SENDING...",
            PagerStatus::Error => "ERR_01",
        }
    }

    /// Whether a normal (non power-toggle) transition is allowed
    pub fn can_transition(&self, to: PagerStatus) -> bool {
        use PagerStatus::*;
        matches!(
            (self, to),
            (Idle, Processing)
                | (Idle, Sending)
                | (Processing, Idle)
                | (Processing, Error)
                | (Sending, Idle)
                | (Error, Idle)
        )
    }
}

impl fmt::Display for PagerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Proof that a rephrase was started; carries the draft snapshot
#[derive(Debug)]
pub struct RephraseTicket {
    epoch: u64,
    text: String,
}

impl RephraseTicket {
    /// Draft text to hand to the rewrite collaborator
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Proof that a send was started; carries the finalized message
#[derive(Debug)]
pub struct SendTicket {
    epoch: u64,
    message: SentMessage,
}

impl SendTicket {
    pub fn message(&self) -> &SentMessage {
        &self.message
    }
}

/// Handle for leaving the error status once its display time is up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryTicket {
    epoch: u64,
}

/// Outcome of [`Pager::finish_rephrase`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RephraseResolution {
    /// Draft replaced with the rewritten text
    Applied,
    /// Collaborator failed; pager is in Error until recovered
    Failed(RecoveryTicket),
    /// Result arrived after a power toggle and was dropped
    Discarded,
}

/// The pager device: draft, power and status
#[derive(Debug, Clone)]
pub struct Pager {
    draft: Draft,
    powered: bool,
    status: PagerStatus,
    epoch: u64,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    /// A powered-on, idle pager with an empty draft
    pub fn new() -> Self {
        Self {
            draft: Draft::new(),
            powered: true,
            status: PagerStatus::Idle,
            epoch: 0,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn status(&self) -> PagerStatus {
        self.status
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Whether rephrase/send buttons should be enabled
    pub fn accepts_commands(&self) -> bool {
        self.powered && self.status == PagerStatus::Idle
    }

    /// Apply an edit from the text field.
    ///
    /// Returns the keystroke cue, or `None` when the device is off.
    pub fn edit(&mut self, value: &str) -> Option<Cue> {
        if !self.powered {
            return None;
        }
        let len = self.draft.set(value);
        Some(Cue::Keystroke { len })
    }

    pub fn begin_rephrase(&mut self) -> PagerResult<RephraseTicket> {
        self.check_ready()?;
        self.transition(PagerStatus::Processing);
        Ok(RephraseTicket {
            epoch: self.epoch,
            text: self.draft.as_str().to_string(),
        })
    }

    pub fn finish_rephrase(
        &mut self,
        ticket: RephraseTicket,
        outcome: Result<String, RewriteError>,
    ) -> RephraseResolution {
        if !self.is_current(ticket.epoch, PagerStatus::Processing) {
            tracing::debug!(epoch = ticket.epoch, "discarding stale rephrase result");
            return RephraseResolution::Discarded;
        }

        match outcome {
            Ok(text) => {
                self.draft.set(&text);
                self.transition(PagerStatus::Idle);
                RephraseResolution::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "rephrase failed, draft left unchanged");
                self.transition(PagerStatus::Error);
                RephraseResolution::Failed(RecoveryTicket { epoch: self.epoch })
            }
        }
    }

    /// Leave the error status. Returns false if the ticket is stale.
    pub fn recover(&mut self, ticket: RecoveryTicket) -> bool {
        if !self.is_current(ticket.epoch, PagerStatus::Error) {
            return false;
        }
        self.transition(PagerStatus::Idle);
        true
    }

    pub fn begin_send(&mut self) -> PagerResult<SendTicket> {
        self.check_ready()?;
        let message = SentMessage {
            text: self.draft.finalized(),
            theme: MessageTheme::derive(self.draft.as_str()),
        };
        self.transition(PagerStatus::Sending);
        Ok(SendTicket {
            epoch: self.epoch,
            message,
        })
    }

    /// Finish a send: clears the draft and returns the message to emit
    pub fn complete_send(&mut self, ticket: SendTicket) -> Option<SentMessage> {
        if !self.is_current(ticket.epoch, PagerStatus::Sending) {
            tracing::debug!(epoch = ticket.epoch, "discarding stale send");
            return None;
        }
        self.draft.clear();
        self.transition(PagerStatus::Idle);
        Some(ticket.message)
    }

    /// Flip power. Always lands in Idle and never touches the draft.
    pub fn toggle_power(&mut self) -> Cue {
        self.powered = !self.powered;
        self.status = PagerStatus::Idle;
        self.epoch += 1;
        tracing::info!(powered = self.powered, "power toggled");
        Cue::PowerToggle
    }

    fn check_ready(&self) -> PagerResult<()> {
        if !self.powered {
            return Err(PagerError::PoweredOff);
        }
        if self.status != PagerStatus::Idle {
            return Err(PagerError::Busy {
                status: self.status,
            });
        }
        if self.draft.is_blank() {
            return Err(PagerError::EmptyDraft);
        }
        Ok(())
    }

    fn is_current(&self, epoch: u64, expected: PagerStatus) -> bool {
        epoch == self.epoch && self.status == expected
    }

    fn transition(&mut self, to: PagerStatus) {
        debug_assert!(
            self.status.can_transition(to),
            "illegal transition {:?} -> {:?}",
            self.status,
            to
        );
        tracing::debug!(from = ?self.status, to = ?to, "pager status");
        self.status = to;
    }
}

/// Shared access to a pager from async flows.
///
/// The closure must not hold the pager across an await point; implementors
/// only need to provide short exclusive access.
pub trait PagerCell {
    fn with_pager<R>(&mut self, f: impl FnOnce(&mut Pager) -> R) -> R;
}

impl PagerCell for Arc<Mutex<Pager>> {
    fn with_pager<R>(&mut self, f: impl FnOnce(&mut Pager) -> R) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager_with(text: &str) -> Pager {
        let mut pager = Pager::new();
        pager.edit(text);
        pager
    }

    #[test]
    fn test_new_pager_is_on_and_idle() {
        let pager = Pager::new();
        assert!(pager.is_powered());
        assert_eq!(pager.status(), PagerStatus::Idle);
        assert!(pager.draft().is_empty());
        assert!(pager.accepts_commands());
    }

    #[test]
    fn test_edit_returns_keystroke_with_length() {
        let mut pager = Pager::new();
        assert_eq!(pager.edit("abc"), Some(Cue::Keystroke { len: 3 }));
        assert_eq!(pager.edit(&"z".repeat(80)), Some(Cue::Keystroke { len: 60 }));
    }

    #[test]
    fn test_edit_rejected_when_off() {
        let mut pager = pager_with("keep me");
        pager.toggle_power();
        assert_eq!(pager.edit("changed"), None);
        assert_eq!(pager.draft().as_str(), "keep me");
    }

    #[test]
    fn test_send_flow() {
        let mut pager = pager_with("  need help asap ");
        let ticket = pager.begin_send().unwrap();
        assert_eq!(pager.status(), PagerStatus::Sending);
        assert_eq!(ticket.message().text, "NEED HELP ASAP");

        let sent = pager.complete_send(ticket).unwrap();
        assert_eq!(sent.theme, MessageTheme::Urgent);
        assert_eq!(pager.status(), PagerStatus::Idle);
        assert!(pager.draft().is_empty());
    }

    #[test]
    fn test_commands_rejected_while_busy() {
        let mut pager = pager_with("hello");
        let _ticket = pager.begin_send().unwrap();

        assert_eq!(
            pager.begin_send().unwrap_err(),
            PagerError::Busy {
                status: PagerStatus::Sending
            }
        );
        assert!(matches!(
            pager.begin_rephrase(),
            Err(PagerError::Busy { .. })
        ));
        assert_eq!(pager.status(), PagerStatus::Sending);
    }

    #[test]
    fn test_blank_draft_rejected() {
        let mut pager = pager_with("   ");
        assert_eq!(pager.begin_send().unwrap_err(), PagerError::EmptyDraft);
        assert_eq!(pager.begin_rephrase().unwrap_err(), PagerError::EmptyDraft);
        assert_eq!(pager.status(), PagerStatus::Idle);
    }

    #[test]
    fn test_powered_off_rejects_commands() {
        let mut pager = pager_with("pick up milk");
        pager.toggle_power();
        assert_eq!(pager.begin_send().unwrap_err(), PagerError::PoweredOff);
        assert_eq!(pager.begin_rephrase().unwrap_err(), PagerError::PoweredOff);
        assert_eq!(pager.status(), PagerStatus::Idle);
        assert_eq!(pager.draft().as_str(), "pick up milk");

        pager.toggle_power();
        assert!(pager.begin_send().is_ok());
    }

    #[test]
    fn test_rephrase_success_replaces_draft() {
        let mut pager = pager_with("call me back");
        let ticket = pager.begin_rephrase().unwrap();
        assert_eq!(ticket.text(), "call me back");
        assert_eq!(pager.status(), PagerStatus::Processing);

        let resolution = pager.finish_rephrase(ticket, Ok("CALL ME 07734".to_string()));
        assert_eq!(resolution, RephraseResolution::Applied);
        assert_eq!(pager.draft().as_str(), "CALL ME 07734");
        assert_eq!(pager.status(), PagerStatus::Idle);
    }

    #[test]
    fn test_rephrase_result_respects_cap() {
        let mut pager = pager_with("ramble");
        let ticket = pager.begin_rephrase().unwrap();
        pager.finish_rephrase(ticket, Ok("A".repeat(100)));
        assert_eq!(pager.draft().len(), 60);
    }

    #[test]
    fn test_rephrase_failure_enters_error_then_recovers() {
        let mut pager = pager_with("call me back");
        let ticket = pager.begin_rephrase().unwrap();

        let resolution = pager.finish_rephrase(ticket, Err(RewriteError::EmptyResponse));
        let RephraseResolution::Failed(recovery) = resolution else {
            panic!("expected failure, got {:?}", resolution);
        };
        assert_eq!(pager.status(), PagerStatus::Error);
        assert_eq!(pager.draft().as_str(), "call me back");
        assert!(!pager.accepts_commands());

        assert!(pager.recover(recovery));
        assert_eq!(pager.status(), PagerStatus::Idle);
        assert!(!pager.recover(recovery));
    }

    #[test]
    fn test_power_toggle_discards_in_flight_send() {
        let mut pager = pager_with("hello");
        let ticket = pager.begin_send().unwrap();

        pager.toggle_power();
        pager.toggle_power();
        assert_eq!(pager.status(), PagerStatus::Idle);

        assert_eq!(pager.complete_send(ticket), None);
        assert_eq!(pager.draft().as_str(), "hello");
    }

    #[test]
    fn test_power_toggle_discards_in_flight_rephrase() {
        let mut pager = pager_with("hello");
        let ticket = pager.begin_rephrase().unwrap();
        pager.toggle_power();

        let resolution = pager.finish_rephrase(ticket, Ok("HI".to_string()));
        assert_eq!(resolution, RephraseResolution::Discarded);
        assert_eq!(pager.draft().as_str(), "hello");
    }

    #[test]
    fn test_power_toggle_clears_error() {
        let mut pager = pager_with("x");
        let ticket = pager.begin_rephrase().unwrap();
        let RephraseResolution::Failed(recovery) =
            pager.finish_rephrase(ticket, Err(RewriteError::NotConfigured))
        else {
            panic!("expected failure");
        };
        pager.toggle_power();
        assert_eq!(pager.status(), PagerStatus::Idle);
        assert!(!pager.recover(recovery));
    }

    #[test]
    fn test_transition_table() {
        use PagerStatus::*;
        assert!(Idle.can_transition(Processing));
        assert!(Idle.can_transition(Sending));
        assert!(Processing.can_transition(Error));
        assert!(Error.can_transition(Idle));
        assert!(!Idle.can_transition(Error));
        assert!(!Sending.can_transition(Processing));
        assert!(!Error.can_transition(Sending));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(PagerStatus::Idle.to_string(), "READY");
        assert_eq!(PagerStatus::Error.label(), "ERR_01");
    }
}
