//! Command line arguments for the `folio` binary.

use std::path::PathBuf;

use clap::Parser;
use folio_core::{ConfigError, Layout, SiteConfig};
use folio_logging::LogConfig;

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(about = "Personal portfolio page")]
pub struct Args {
    /// Page layout: `classic` (single page) or `tabbed` (sidebar)
    #[arg(short, long, default_value = "tabbed")]
    pub layout: Layout,

    /// Directory for preferences.json (defaults to $FOLIO_DATA_DIR or the platform data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Price API root
    #[arg(long, default_value = folio_core::ticker::DEFAULT_API_BASE)]
    pub price_api: String,

    /// Asset id to track
    #[arg(long, default_value = folio_core::ticker::DEFAULT_ASSET)]
    pub asset: String,

    /// Seconds between price polls
    #[arg(long, default_value_t = 30)]
    pub poll_secs: u64,

    /// Fake loading delay between sections, in milliseconds
    #[arg(long, default_value_t = 800)]
    pub loading_ms: u64,

    /// Hide the price ticker
    #[arg(long)]
    pub no_ticker: bool,

    /// Default log level (RUST_LOG overrides)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log JSON lines instead of pretty output
    #[arg(long)]
    pub log_json: bool,

    /// Also write JSONL logs into this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// Builds and validates the site configuration.
    pub fn site_config(&self) -> Result<SiteConfig, ConfigError> {
        let mut config = SiteConfig {
            layout: self.layout,
            loading_delay_ms: self.loading_ms,
            ..SiteConfig::default()
        };
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        config.ticker.enabled = !self.no_ticker;
        config.ticker.api_base = self.price_api.clone();
        config.ticker.asset_id = self.asset.clone();
        config.ticker.poll_interval_secs = self.poll_secs;
        if self.asset != folio_core::ticker::DEFAULT_ASSET {
            config.ticker.symbol = self.asset.to_ascii_uppercase();
        }
        config.validate()?;
        Ok(config)
    }

    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            default_level: self.log_level.clone(),
            ..LogConfig::default()
        };
        config.console.pretty = !self.log_json;
        config.console.ansi = !self.log_json;
        match &self.log_dir {
            Some(dir) => config.with_log_dir(dir),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("folio").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        let config = args.site_config().unwrap();
        assert_eq!(config.layout, Layout::Tabbed);
        assert!(config.ticker.enabled);
        assert_eq!(config.ticker.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.loading_delay(), Duration::from_millis(800));
        assert!(args.log_config().console.pretty);
    }

    #[test]
    fn test_classic_without_ticker() {
        let dir = tempfile::tempdir().unwrap();
        let args = parse(&[
            "--layout",
            "classic",
            "--no-ticker",
            "--data-dir",
            dir.path().to_str().unwrap(),
        ]);
        let config = args.site_config().unwrap();
        assert_eq!(config.layout, Layout::Classic);
        assert!(!config.ticker.enabled);
        assert_eq!(config.data_dir, dir.path());
    }

    #[test]
    fn test_zero_poll_rejected() {
        let args = parse(&["--poll-secs", "0"]);
        assert!(args.site_config().is_err());
    }

    #[test]
    fn test_unknown_layout_rejected() {
        let result = Args::try_parse_from(["folio", "--layout", "grid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_other_asset_gets_symbol() {
        let config = parse(&["--asset", "eth"]).site_config().unwrap();
        assert_eq!(config.ticker.symbol, "ETH");
    }

    #[test]
    fn test_json_logs_with_dir() {
        let args = parse(&["--log-json", "--log-dir", "/tmp/folio-logs"]);
        let log = args.log_config();
        assert!(!log.console.pretty);
        assert!(log.file.is_some());
    }
}
