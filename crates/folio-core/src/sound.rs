//! Toggle sound effects.
//!
//! A toggle plays two short tone bursts, the second 100 ms after the first.
//! Playback goes through a [`ToneSink`], which owns the platform audio API;
//! every sink failure is logged and swallowed here.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::SoundError;
use crate::preferences::Preferences;

/// Gap between the start of the first and second toggle bursts.
pub const TOGGLE_TONE_GAP: Duration = Duration::from_millis(100);

/// Length of each toggle burst.
pub const TOGGLE_TONE_LENGTH: Duration = Duration::from_millis(80);

const FIRST_TONE_HZ: f32 = 880.0;
const SECOND_TONE_HZ: f32 = 660.0;
const TONE_GAIN: f32 = 0.1;

/// One short synthesized beep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneBurst {
    pub frequency_hz: f32,
    /// Delay from the moment of scheduling until the tone starts.
    pub start_offset: Duration,
    pub duration: Duration,
    /// Peak gain, 0.0 to 1.0.
    pub gain: f32,
}

/// The two bursts played on a toggle.
pub fn toggle_bursts() -> [ToneBurst; 2] {
    [
        ToneBurst {
            frequency_hz: FIRST_TONE_HZ,
            start_offset: Duration::ZERO,
            duration: TOGGLE_TONE_LENGTH,
            gain: TONE_GAIN,
        },
        ToneBurst {
            frequency_hz: SECOND_TONE_HZ,
            start_offset: TOGGLE_TONE_GAP,
            duration: TOGGLE_TONE_LENGTH,
            gain: TONE_GAIN,
        },
    ]
}

/// Platform audio output.
///
/// Implementations acquire a fresh audio context per burst and must not
/// reuse it.
pub trait ToneSink {
    fn play(&self, burst: &ToneBurst) -> Result<(), SoundError>;
}

/// Sound preference plus the toggle sound itself.
#[derive(Clone, Debug, PartialEq)]
pub struct SoundEffects {
    enabled: bool,
    prefs: Preferences,
}

impl SoundEffects {
    /// Reads the stored preference; absent means disabled.
    pub fn load(prefs: Preferences) -> Self {
        let enabled = prefs.sound_enabled();
        debug!(enabled, "Loaded sound preference");
        Self { enabled, prefs }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flips and persists the preference. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled)
    }

    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        self.enabled = enabled;
        let persisted = self.prefs.set_sound_enabled(enabled);
        info!(enabled, persisted, "Sound preference changed");
        enabled
    }

    /// Plays the toggle bursts when sound is enabled.
    ///
    /// Returns how many bursts the sink accepted.
    pub fn play_toggle_sound(&self, sink: &dyn ToneSink) -> usize {
        if !self.enabled {
            return 0;
        }
        let mut scheduled = 0;
        for burst in toggle_bursts() {
            match sink.play(&burst) {
                Ok(()) => scheduled += 1,
                Err(e) => {
                    warn!(error = %e, frequency_hz = burst.frequency_hz, "Tone playback failed");
                }
            }
        }
        scheduled
    }
}
