//! Live price ticker.
//!
//! - [`PriceSource`]: where prices come from ([`CoinGeckoSource`] in production)
//! - [`TickerState`]: what the widget shows; failures never replace it
//! - [`PricePoller`]: fixed-interval, fire-and-forget polling
//! - [`format_usd`] / [`ChangeIndicator`]: display formatting

mod poller;
mod source;

pub use poller::PricePoller;
pub use source::{decode_price, CoinGeckoSource, PriceSource, DEFAULT_API_BASE, DEFAULT_ASSET};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TickerError;

/// Default interval between price polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Placeholder shown until the first successful fetch.
pub const LOADING_TEXT: &str = "Loading…";

/// Latest quote for the tracked asset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Price in USD.
    pub price: f64,
    /// Percent change over the last 24 hours.
    pub change_percent_24h: f64,
}

impl PricePoint {
    pub fn price_text(&self) -> String {
        format_usd(self.price)
    }

    pub fn change(&self) -> ChangeIndicator {
        ChangeIndicator::from_percent(self.change_percent_24h)
    }
}

/// What the ticker currently displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TickerState {
    /// Nothing fetched yet.
    #[default]
    Loading,
    /// Last successful quote.
    Live(PricePoint),
}

impl TickerState {
    /// Applies a fetch outcome. Returns whether the display changed.
    ///
    /// Failures are logged and leave the current display untouched.
    pub fn apply(&mut self, result: Result<PricePoint, TickerError>) -> bool {
        match result {
            Ok(point) => {
                let changed = *self != TickerState::Live(point);
                *self = TickerState::Live(point);
                changed
            }
            Err(e) => {
                warn!(error = %e, "Price fetch failed, keeping last value");
                false
            }
        }
    }

    pub fn point(&self) -> Option<PricePoint> {
        match self {
            TickerState::Loading => None,
            TickerState::Live(point) => Some(*point),
        }
    }

    /// Price text, or the loading placeholder.
    pub fn price_text(&self) -> String {
        self.point()
            .map(|p| p.price_text())
            .unwrap_or_else(|| LOADING_TEXT.to_string())
    }

    pub fn change(&self) -> Option<ChangeIndicator> {
        self.point().map(|p| p.change())
    }
}

/// Direction of the 24h move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn marker(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Flat => "•",
        }
    }

    /// CSS modifier class for the indicator.
    pub fn css_class(&self) -> &'static str {
        match self {
            Direction::Up => "change-up",
            Direction::Down => "change-down",
            Direction::Flat => "change-flat",
        }
    }
}

/// Directional marker plus the unsigned magnitude, e.g. `▼ 2.30%`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeIndicator {
    pub direction: Direction,
    pub magnitude: String,
}

impl ChangeIndicator {
    pub fn from_percent(percent: f64) -> Self {
        let direction = if percent > 0.0 {
            Direction::Up
        } else if percent < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        };
        let magnitude = if percent.is_finite() {
            format!("{:.2}%", percent.abs())
        } else {
            "0.00%".to_string()
        };
        Self {
            direction,
            magnitude,
        }
    }

    pub fn marker(&self) -> &'static str {
        self.direction.marker()
    }
}

impl std::fmt::Display for ChangeIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.marker(), self.magnitude)
    }
}

/// Formats a USD amount with thousands separators and two decimals.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "$—".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}
