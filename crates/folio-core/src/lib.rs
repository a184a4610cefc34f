//! # Folio Core
//!
//! UI-free logic behind the portfolio page.
//!
//! ## Features
//!
//! - **Preferences**: string key/value storage for the theme and sound flags,
//!   degrading to memory when storage is unavailable
//! - **ThemeController**: light/dark toggle written through to storage
//! - **SectionNavigator**: tab switching with a fixed fake-loading delay
//! - **Price ticker**: CoinGecko source, fixed-interval poller and formatting
//! - **SoundEffects**: two-tone toggle feedback behind a preference
//! - **SiteContent**: the hard-coded profile, work, skills and reading data
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio_core::{Preferences, ThemeController, Theme};
//!
//! let prefs = Preferences::in_memory();
//! let mut theme = ThemeController::load(prefs.clone());
//! assert_eq!(theme.current(), Theme::Light);
//! theme.toggle();
//! assert_eq!(prefs.theme(), Some(Theme::Dark));
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod navigator;
pub mod preferences;
pub mod sound;
pub mod theme;
pub mod ticker;

// Re-exports
pub use config::{default_data_dir, Layout, SiteConfig, TickerConfig, WindowConfig};
pub use content::{SiteContent, SITE_DESCRIPTION, SITE_TITLE};
pub use error::{ConfigError, SoundError, StoreError, TickerError};
pub use navigator::{Section, SectionNavigator};
pub use preferences::{
    FilePreferenceStore, InMemoryPreferenceStore, PreferenceStore, Preferences, SOUND_KEY,
    THEME_KEY,
};
pub use sound::{toggle_bursts, SoundEffects, ToneBurst, ToneSink};
pub use theme::{initial_theme, Theme, ThemeController};
pub use ticker::{
    format_usd, ChangeIndicator, CoinGeckoSource, Direction, PricePoint, PricePoller,
    PriceSource, TickerState,
};
