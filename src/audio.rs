//! Web Audio beeper.
//!
//! Tones are played by the webview. The first tone creates a single
//! `AudioContext` on the page; later tones reuse it and resume it if the
//! browser suspended it.

use std::sync::OnceLock;

use beeper_core::{Cue, ScheduledTone, ToneSink};
use dioxus::prelude::*;

static AUDIO: OnceLock<WebAudioSink> = OnceLock::new();

/// Process-wide audio output, created on first use
pub fn audio_output() -> &'static WebAudioSink {
    AUDIO.get_or_init(|| {
        tracing::debug!("audio output initialized");
        WebAudioSink { _private: () }
    })
}

/// Square-wave beeps through the webview's Web Audio API
pub struct WebAudioSink {
    _private: (),
}

impl WebAudioSink {
    fn script(tones: &[ScheduledTone]) -> String {
        let calls: String = tones
            .iter()
            .map(|t| {
                format!(
                    "beep({}, {}, {});",
                    t.tone.frequency_hz,
                    t.tone.duration_ms,
                    t.offset_ms
                )
            })
            .collect();

        format!(
            r#"
            const ctx = window.__beeperAudio || (window.__beeperAudio = new (window.AudioContext || window.webkitAudioContext)());
            if (ctx.state === 'suspended') {{ ctx.resume(); }}
            const beep = (freq, durationMs, offsetMs) => {{
              const start = ctx.currentTime + offsetMs / 1000;
              const end = start + durationMs / 1000;
              const osc = ctx.createOscillator();
              const gain = ctx.createGain();
              osc.connect(gain);
              gain.connect(ctx.destination);
              osc.type = 'square';
              osc.frequency.value = freq;
              gain.gain.setValueAtTime(0.1, start);
              gain.gain.exponentialRampToValueAtTime(0.00001, end);
              osc.start(start);
              osc.stop(end);
            }};
            {calls}
            "#
        )
    }
}

impl ToneSink for WebAudioSink {
    fn sound(&self, cue: Cue) {
        tracing::trace!(?cue, "beep");
        let _ = document::eval(&Self::script(&cue.tones()));
    }
}
