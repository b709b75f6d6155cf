//! Timed command flows.
//!
//! Each function runs one user command end to end: guard, cue, wait on the
//! collaborator or the clock, then settle the pager. The pager is only
//! borrowed between awaits, so the UI can keep reading it while a flow is
//! parked. Dropping the future (component teardown) abandons the flow; the
//! pager is left in its intermediate status until the next power toggle.

use crate::audio::{Cue, ToneSink};
use crate::error::PagerResult;
use crate::message::SentMessage;
use crate::pager::{Pager, PagerCell, RephraseResolution, ERROR_DISPLAY, SEND_DELAY};
use crate::rewrite::{RewriteCollaborator, Rewriter};

/// Run a rephrase: Processing, collaborator call, then Idle or Error.
///
/// On failure this also waits out [`ERROR_DISPLAY`] and recovers to Idle.
pub async fn rephrase<P, C>(
    cell: &mut P,
    rewriter: &Rewriter<C>,
    sink: &dyn ToneSink,
) -> PagerResult<RephraseResolution>
where
    P: PagerCell,
    C: RewriteCollaborator,
{
    let ticket = cell.with_pager(Pager::begin_rephrase)?;
    sink.sound(Cue::RephraseStart);

    let outcome = rewriter.rephrase(ticket.text()).await;
    let resolution = cell.with_pager(|pager| pager.finish_rephrase(ticket, outcome));

    match resolution {
        RephraseResolution::Applied => sink.sound(Cue::RephraseSuccess),
        RephraseResolution::Failed(recovery) => {
            tokio::time::sleep(ERROR_DISPLAY).await;
            if cell.with_pager(|pager| pager.recover(recovery)) {
                tracing::debug!("pager recovered from error");
            }
        }
        RephraseResolution::Discarded => {}
    }

    Ok(resolution)
}

/// Run a send: Sending, transmission delay, then emit.
///
/// Returns `Ok(None)` if the send was invalidated by a power toggle while
/// the delay was running.
pub async fn send<P>(cell: &mut P, sink: &dyn ToneSink) -> PagerResult<Option<SentMessage>>
where
    P: PagerCell,
{
    let ticket = cell.with_pager(Pager::begin_send)?;
    sink.sound(Cue::SendStart);

    tokio::time::sleep(SEND_DELAY).await;

    let sent = cell.with_pager(|pager| pager.complete_send(ticket));
    match &sent {
        Some(message) => {
            tracing::info!(
                theme = %message.theme,
                len = message.text.chars().count(),
                "message sent"
            );
            sink.sound(Cue::SendComplete);
        }
        None => tracing::debug!("send abandoned"),
    }
    Ok(sent)
}
