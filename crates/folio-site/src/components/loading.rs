use dioxus::prelude::*;
use folio_core::Section;

/// Fake loading screen shown while a section switch is pending.
#[component]
pub fn LoadingScreen(target: Section, delay_ms: u64) -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "loading-message", "{target.loading_message()}" }
            div {
                class: "loading-bar",
                style: "--loading-ms: {delay_ms}ms",
                div { class: "loading-bar-fill" }
            }
        }
    }
}
