//! Root application component.

use dioxus::prelude::*;
use folio_core::{Layout, SiteConfig};

use crate::state::SiteContext;
use crate::theme::ThemedRoot;

use super::{ClassicPage, TabbedPage};

/// Provides page state, then renders the configured layout.
#[component]
pub fn App(config: SiteConfig) -> Element {
    SiteContext::provide(&config);

    let ticker = config.ticker.enabled.then(|| config.ticker.clone());

    rsx! {
        ThemedRoot {
            match config.layout {
                Layout::Classic => rsx! { ClassicPage { ticker } },
                Layout::Tabbed => rsx! { TabbedPage { ticker } },
            }
        }
    }
}
