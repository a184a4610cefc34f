//! Site configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::SITE_TITLE;
use crate::error::ConfigError;
use crate::navigator::DEFAULT_LOADING_DELAY;
use crate::ticker::{DEFAULT_API_BASE, DEFAULT_ASSET, DEFAULT_POLL_INTERVAL};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "FOLIO_DATA_DIR";

/// Which page variant to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One scrolling page with every section.
    Classic,
    /// Sidebar navigation across four panels with a loading screen.
    #[default]
    Tabbed,
}

impl std::str::FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Layout::Classic),
            "tabbed" => Ok(Layout::Tabbed),
            other => Err(ConfigError::invalid(
                "layout",
                format!("expected 'classic' or 'tabbed', got '{other}'"),
            )),
        }
    }
}

/// Price ticker settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerConfig {
    pub enabled: bool,
    pub api_base: String,
    pub asset_id: String,
    /// Short label shown beside the price.
    pub symbol: String,
    pub poll_interval_secs: u64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_base: DEFAULT_API_BASE.to_string(),
            asset_id: DEFAULT_ASSET.to_string(),
            symbol: "BTC".to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL.as_secs(),
        }
    }
}

impl TickerConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Desktop window settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            width: 1100.0,
            height: 820.0,
        }
    }
}

/// Top-level configuration for the site binary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub layout: Layout,
    /// Directory holding `preferences.json`.
    pub data_dir: PathBuf,
    pub ticker: TickerConfig,
    pub loading_delay_ms: u64,
    pub window: WindowConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            data_dir: default_data_dir(),
            ticker: TickerConfig::default(),
            loading_delay_ms: DEFAULT_LOADING_DELAY.as_millis() as u64,
            window: WindowConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// Rejects values the page cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticker.poll_interval_secs == 0 {
            return Err(ConfigError::invalid(
                "ticker.poll_interval_secs",
                "must be at least 1 second",
            ));
        }
        if self.ticker.asset_id.trim().is_empty() {
            return Err(ConfigError::invalid("ticker.asset_id", "must not be empty"));
        }
        if !self.ticker.api_base.starts_with("http://")
            && !self.ticker.api_base.starts_with("https://")
        {
            return Err(ConfigError::invalid(
                "ticker.api_base",
                format!("not an http(s) URL: {}", self.ticker.api_base),
            ));
        }
        Ok(())
    }
}

/// Platform-specific data directory for preference persistence.
///
/// `$FOLIO_DATA_DIR` wins, then the platform data dir, then `./folio`.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::data_dir()
        .map(|dir| dir.join("folio"))
        .unwrap_or_else(|| PathBuf::from(".").join("folio"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layout, Layout::Tabbed);
        assert_eq!(config.loading_delay(), Duration::from_millis(800));
        assert_eq!(config.ticker.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.ticker.asset_id, "bitcoin");
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = SiteConfig::default();
        config.ticker.poll_interval_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("poll_interval_secs"));
    }

    #[test]
    fn test_bad_api_base_rejected() {
        let mut config = SiteConfig::default();
        config.ticker.api_base = "ftp://prices".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_layout_parse() {
        assert_eq!("classic".parse::<Layout>().unwrap(), Layout::Classic);
        assert_eq!(" Tabbed ".parse::<Layout>().unwrap(), Layout::Tabbed);
        assert!("grid".parse::<Layout>().is_err());
    }

    #[test]
    fn test_serde_roundtrip_keeps_layout() {
        let config = SiteConfig {
            layout: Layout::Classic,
            ..SiteConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"layout\":\"classic\""));
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
