//! Theme root and toggle.

use dioxus::prelude::*;

use crate::platform::{apply_document_theme, WebAudioSink};
use crate::state::use_site;

/// Root wrapper that carries the `data-theme` attribute.
///
/// Also mirrors the attribute onto the document element whenever the
/// theme changes, so `html`/`body` rules follow.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let ctx = use_site();
    let theme = ctx.theme.read().current();

    use_effect(move || {
        apply_document_theme(ctx.theme.read().current());
    });

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.attribute_value()}",
            {children}
        }
    }
}

/// Pixel L/D switch; plays the toggle sound when sound is on.
#[component]
pub fn ThemeToggle() -> Element {
    let ctx = use_site();
    let mut theme_signal = ctx.theme;
    let sound = ctx.sound;
    let theme = theme_signal.read().current();

    rsx! {
        div { class: "theme-toggle-container",
            div { class: "theme-toggle-label", "{theme.badge()}" }
            div {
                class: "theme-toggle",
                role: "switch",
                "aria-checked": theme == folio_core::Theme::Dark,
                "data-theme": "{theme.attribute_value()}",
                onclick: move |_| {
                    theme_signal.write().toggle();
                    sound.read().play_toggle_sound(&WebAudioSink);
                },
                div { class: "theme-toggle-slider", "{theme.slider_glyph()}" }
                div { class: "theme-toggle-labels",
                    span { "L" }
                    span { "D" }
                }
            }
        }
    }
}
