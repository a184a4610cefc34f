//! Sidebar navigation across four panels.

use dioxus::prelude::*;
use folio_core::{Section, TickerConfig};

use crate::state::use_site;

use super::{
    ContactList, Controls, LoadingScreen, PageSection, ProfileHeader, ProjectsList, ReadingList,
    SectionSidebar, SkillsGrid, WorkList,
};

#[component]
pub fn TabbedPage(#[props(!optional)] ticker: Option<TickerConfig>) -> Element {
    let ctx = use_site();
    let mut navigator = ctx.navigator;

    let nav = navigator.read();
    let active = nav.current();
    let pending = nav.pending();
    let delay_ms = nav.delay().as_millis() as u64;
    drop(nav);

    // The completion task belongs to this component, so it is dropped
    // with the page instead of firing into an unmounted view.
    let on_navigate = move |target: Section| {
        if navigator.write().begin(target) {
            let delay = navigator.read().delay();
            spawn(async move {
                tokio::time::sleep(delay).await;
                navigator.write().finish();
            });
        }
    };

    rsx! {
        div { class: "tabbed",
            SectionSidebar {
                active,
                loading: pending.is_some(),
                on_navigate,
                Controls { ticker }
            }
            main { class: "panel",
                if let Some(target) = pending {
                    LoadingScreen { target, delay_ms }
                } else {
                    SectionPanel { section: active }
                }
            }
        }
    }
}

/// Content for one section of the tabbed layout.
#[component]
fn SectionPanel(section: Section) -> Element {
    match section {
        Section::Dev => rsx! {
            ProfileHeader {}
            PageSection { title: "Skills & Tech Stack", SkillsGrid {} }
            PageSection { title: "Reading", ReadingList {} }
        },
        Section::Work => rsx! {
            PageSection { title: "Work", WorkList {} }
        },
        Section::Projects => rsx! {
            PageSection { title: "Projects", ProjectsList {} }
        },
        Section::Contact => rsx! {
            PageSection { title: "Contact", ContactList {} }
        },
    }
}
