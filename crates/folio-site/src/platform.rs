//! Webview-side effects: document attributes and Web Audio tones.

use dioxus::prelude::*;
use folio_core::{SoundError, Theme, ToneBurst, ToneSink};

/// Sets `data-theme` on the document element so page-level CSS follows.
pub fn apply_document_theme(theme: Theme) {
    document::eval(&format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        theme.attribute_value()
    ));
}

/// Builds the Web Audio script for one burst.
///
/// Each script creates its own `AudioContext` and closes it when the
/// oscillator ends. Returns `"ok"`, `"unsupported"` or an error string.
pub fn tone_script(burst: &ToneBurst) -> String {
    format!(
        r#"try {{
  const Ctx = window.AudioContext || window.webkitAudioContext;
  if (!Ctx) {{ return "unsupported"; }}
  const ctx = new Ctx();
  const osc = ctx.createOscillator();
  const gain = ctx.createGain();
  const start = ctx.currentTime + {offset:.3};
  osc.type = "square";
  osc.frequency.setValueAtTime({freq:.1}, start);
  gain.gain.setValueAtTime({gain:.3}, start);
  gain.gain.exponentialRampToValueAtTime(0.001, start + {duration:.3});
  osc.connect(gain);
  gain.connect(ctx.destination);
  osc.onended = () => ctx.close();
  osc.start(start);
  osc.stop(start + {duration:.3});
  return "ok";
}} catch (e) {{
  return "error: " + e;
}}"#,
        offset = burst.start_offset.as_secs_f64(),
        freq = burst.frequency_hz,
        gain = burst.gain,
        duration = burst.duration.as_secs_f64(),
    )
}

/// Plays tones through the webview's Web Audio API.
///
/// Must be used from inside the Dioxus runtime (event handlers, effects).
/// Playback results arrive asynchronously and are only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebAudioSink;

impl ToneSink for WebAudioSink {
    fn play(&self, burst: &ToneBurst) -> Result<(), SoundError> {
        let eval = document::eval(&tone_script(burst));
        let frequency_hz = burst.frequency_hz;
        spawn(async move {
            match eval.await {
                Ok(serde_json::Value::String(status)) if status == "ok" => {
                    tracing::trace!(frequency_hz, "Tone scheduled");
                }
                Ok(status) => {
                    let err = SoundError::Unsupported(status.to_string());
                    tracing::warn!(error = %err, frequency_hz, "Tone not played");
                }
                Err(e) => {
                    let err = SoundError::Platform(e.to_string());
                    tracing::warn!(error = %err, frequency_hz, "Tone not played");
                }
            }
        });
        Ok(())
    }
}
