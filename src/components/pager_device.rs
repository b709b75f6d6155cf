//! Pager Device Component
//!
//! The composing device: LCD with status bar and draft, plus rephrase,
//! power and send buttons. Command flows run in component-owned tasks, so
//! unmounting the pager drops any in-flight rephrase.

use std::time::Duration;

use beeper_core::pager::driver;
use beeper_core::{Pager, PagerStatus, SentMessage, ToneSink, MAX_DRAFT_CHARS};
use dioxus::prelude::*;

use crate::audio::audio_output;
use crate::context::{use_rewriter, SignalPager};

/// LCD cursor blink half-period
const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Pager device with draft buffer, audio feedback and optional rephrase
#[component]
pub fn PagerDevice(
    /// Handler called with the finalized message once transmission completes
    on_send: EventHandler<SentMessage>,
) -> Element {
    let mut pager = use_signal(Pager::new);
    let mut cursor_visible = use_signal(|| true);
    let rewriter = use_rewriter();

    // Blinking cursor
    use_future(move || async move {
        loop {
            tokio::time::sleep(CURSOR_BLINK).await;
            let visible = *cursor_visible.peek();
            cursor_visible.set(!visible);
        }
    });

    let handle_input = move |e: FormEvent| {
        let cue = pager.write().edit(&e.value());
        if let Some(cue) = cue {
            audio_output().sound(cue);
        }
    };

    let handle_send = move || {
        spawn(async move {
            let mut cell = SignalPager(pager);
            match driver::send(&mut cell, audio_output()).await {
                Ok(Some(sent)) => on_send.call(sent),
                Ok(None) => {}
                Err(e) => tracing::debug!(error = %e, "send ignored"),
            }
        });
    };

    let handle_rephrase = move |_: MouseEvent| {
        let rewriter = rewriter.clone();
        spawn(async move {
            let mut cell = SignalPager(pager);
            if let Err(e) = driver::rephrase(&mut cell, rewriter.as_ref(), audio_output()).await {
                tracing::debug!(error = %e, "rephrase ignored");
            }
        });
    };

    let handle_power = move |_: MouseEvent| {
        let cue = pager.write().toggle_power();
        audio_output().sound(cue);
    };

    // Enter (without Shift) sends
    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            handle_send();
        }
    };

    let (status, powered, draft, enabled) = {
        let p = pager.read();
        (
            p.status(),
            p.is_powered(),
            p.draft().to_string(),
            p.accepts_commands(),
        )
    };

    let status_class = if status == PagerStatus::Error {
        "lcd__status lcd__status--error"
    } else {
        "lcd__status"
    };
    let cursor_class = if cursor_visible() {
        "lcd__cursor"
    } else {
        "lcd__cursor lcd__cursor--hidden"
    };

    rsx! {
        div { class: "pager",
            div { class: "pager__clip" }

            // Brand label
            div { class: "pager__brand",
                span { class: "pager__brand-name", "MOTOROLA" }
                span { class: "pager__model", "ADVISOR PLATINUM" }
            }

            // LCD screen
            div { class: if powered { "lcd" } else { "lcd lcd--off" },
                if powered {
                    div { class: "{status_class}",
                        span { "{status}" }
                        span { class: "pulse", "Please Call" }
                    }
                    div { class: "lcd__input-row",
                        textarea {
                            class: "lcd__input",
                            placeholder: "TYPE MESSAGE...",
                            value: "{draft}",
                            maxlength: MAX_DRAFT_CHARS as i64,
                            autofocus: true,
                            oninput: handle_input,
                            onkeydown: handle_keydown,
                        }
                        span { class: "{cursor_class}" }
                    }
                } else {
                    div { class: "lcd__off", "OFF" }
                }
            }

            // Controls
            div { class: "pager__controls",
                button {
                    class: "pager-btn pager-btn--rephrase",
                    title: "Rephrase into pager slang",
                    disabled: !enabled,
                    onclick: handle_rephrase,
                    span {
                        class: if status == PagerStatus::Processing { "spin" } else { "" },
                        "⟳"
                    }
                }
                button {
                    class: "pager-btn pager-btn--power",
                    title: "Power",
                    onclick: handle_power,
                    "⏻"
                }
                div {}
                button {
                    class: "pager-btn pager-btn--send",
                    title: "Send (Enter)",
                    disabled: !enabled,
                    onclick: move |_| handle_send(),
                    "➤"
                }
            }

            div { class: "pager__dots",
                for i in 0..5 {
                    div { key: "{i}", class: "pager__dot" }
                }
            }
        }
    }
}
