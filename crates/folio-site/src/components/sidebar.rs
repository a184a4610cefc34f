//! Section sidebar for the tabbed layout.

use dioxus::prelude::*;
use folio_core::Section;

use crate::state::use_site;

/// Name block, one entry per section, and a footer slot for controls.
///
/// Entries are rendered disabled while a section is loading; clicks are
/// still forwarded and dropped by the navigator.
#[component]
pub fn SectionSidebar(
    active: Section,
    loading: bool,
    on_navigate: EventHandler<Section>,
    children: Element,
) -> Element {
    let ctx = use_site();
    let content = ctx.content.read();
    let name = content.profile.name;
    let tagline = content.profile.tagline;

    rsx! {
        nav { class: "sidebar",
            h1 { class: "sidebar-name", "{name}" }
            div { class: "sidebar-tagline", "{tagline}" }

            div { class: "sidebar-section-label", "NAVIGATE" }
            for section in Section::all().iter().copied() {
                {
                    let item_class = if section == active {
                        "sidebar-item active"
                    } else if loading {
                        "sidebar-item disabled"
                    } else {
                        "sidebar-item"
                    };
                    rsx! {
                        div {
                            key: "{section.label()}",
                            class: "{item_class}",
                            onclick: move |_| on_navigate.call(section),
                            div { class: "sidebar-icon", "{section.icon()}" }
                            div { class: "sidebar-label", "{section.label()}" }
                        }
                    }
                }
            }

            div { class: "sidebar-footer", {children} }
        }
    }
}
