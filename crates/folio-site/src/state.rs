//! Page state shared through Dioxus context.

use dioxus::prelude::*;
use folio_core::{
    Preferences, SectionNavigator, SiteConfig, SiteContent, SoundEffects, ThemeController,
};

/// Signals every component may read; provided once by the root.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub theme: Signal<ThemeController>,
    pub sound: Signal<SoundEffects>,
    pub navigator: Signal<SectionNavigator>,
    pub content: Signal<SiteContent>,
}

impl SiteContext {
    /// Loads preferences and seeds every signal. Call from a component.
    pub fn provide(config: &SiteConfig) -> Self {
        let data_dir = config.data_dir.clone();
        let loading_delay = config.loading_delay();

        let prefs = use_hook(move || Preferences::open_or_in_memory(&data_dir));
        let theme_prefs = prefs.clone();
        let theme = use_signal(move || ThemeController::load(theme_prefs));
        let sound = use_signal(move || SoundEffects::load(prefs));
        let navigator = use_signal(move || {
            SectionNavigator::with_delay(Default::default(), loading_delay)
        });
        let content = use_signal(SiteContent::default_content);

        use_context_provider(|| Self {
            theme,
            sound,
            navigator,
            content,
        })
    }
}

/// The context provided by [`SiteContext::provide`].
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}
