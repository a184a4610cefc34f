//! Floating controls: theme switch, sound switch, ticker.

use dioxus::prelude::*;
use folio_core::TickerConfig;

use crate::platform::WebAudioSink;
use crate::state::use_site;
use crate::theme::ThemeToggle;

use super::PriceTicker;

#[component]
pub fn Controls(#[props(!optional)] ticker: Option<TickerConfig>) -> Element {
    rsx! {
        div { class: "controls",
            if let Some(config) = ticker.clone() {
                PriceTicker { config }
            }
            SoundToggle {}
            ThemeToggle {}
        }
    }
}

/// Sound on/off; turning it on plays the toggle sound as confirmation.
#[component]
pub fn SoundToggle() -> Element {
    let ctx = use_site();
    let mut sound = ctx.sound;
    let enabled = sound.read().is_enabled();

    rsx! {
        button {
            class: if enabled { "sound-toggle sound-on" } else { "sound-toggle" },
            title: if enabled { "Mute UI sounds" } else { "Enable UI sounds" },
            onclick: move |_| {
                let now_enabled = sound.write().toggle();
                if now_enabled {
                    sound.read().play_toggle_sound(&WebAudioSink);
                }
            },
            if enabled { "♪ on" } else { "♪ off" }
        }
    }
}
