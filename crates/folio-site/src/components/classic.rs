//! Single scrolling page with every section.

use dioxus::prelude::*;
use folio_core::TickerConfig;

use super::{
    ContactList, Controls, PageSection, ProfileHeader, ProjectsList, ReadingList, SkillsGrid,
    WorkList,
};

#[component]
pub fn ClassicPage(#[props(!optional)] ticker: Option<TickerConfig>) -> Element {
    rsx! {
        Controls { ticker }
        main { class: "page",
            ProfileHeader {}
            PageSection { title: "Work", WorkList {} }
            PageSection { title: "Skills & Tech Stack", SkillsGrid {} }
            PageSection { title: "Projects", ProjectsList {} }
            PageSection { title: "Reading", ReadingList {} }
            PageSection { title: "Contact", ContactList {} }
        }
    }
}
