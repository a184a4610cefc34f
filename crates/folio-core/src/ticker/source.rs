//! Price sources.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::PricePoint;
use crate::error::TickerError;

/// Public CoinGecko API root.
pub const DEFAULT_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Asset tracked by default.
pub const DEFAULT_ASSET: &str = "bitcoin";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can produce the latest quote.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self) -> Result<PricePoint, TickerError>;
}

/// Quote for one asset as returned by `/simple/price`.
#[derive(Debug, Deserialize)]
struct AssetQuote {
    usd: Option<f64>,
    usd_24h_change: Option<f64>,
}

/// Decodes a `/simple/price` body such as
/// `{"bitcoin":{"usd":65000.5,"usd_24h_change":-2.3}}`.
pub fn decode_price(body: &str, asset_id: &str) -> Result<PricePoint, TickerError> {
    let mut quotes: HashMap<String, AssetQuote> =
        serde_json::from_str(body).map_err(|e| TickerError::Decode(e.to_string()))?;
    let quote = quotes
        .remove(asset_id)
        .ok_or_else(|| TickerError::missing(asset_id))?;
    let price = quote
        .usd
        .ok_or_else(|| TickerError::missing(format!("{asset_id}.usd")))?;
    let change_percent_24h = quote
        .usd_24h_change
        .ok_or_else(|| TickerError::missing(format!("{asset_id}.usd_24h_change")))?;
    Ok(PricePoint {
        price,
        change_percent_24h,
    })
}

/// Client for the CoinGecko simple price endpoint. No authentication.
#[derive(Clone, Debug)]
pub struct CoinGeckoSource {
    client: reqwest::Client,
    base_url: String,
    asset_id: String,
}

impl CoinGeckoSource {
    /// Create a client against `base_url` (e.g. [`DEFAULT_API_BASE`]).
    pub fn new(base_url: &str, asset_id: &str) -> Result<Self, TickerError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TickerError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            asset_id: asset_id.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }
}

#[async_trait]
impl PriceSource for CoinGeckoSource {
    async fn fetch(&self) -> Result<PricePoint, TickerError> {
        let url = format!("{}/simple/price", self.base_url);
        let body = self
            .client
            .get(&url)
            .query(&[
                ("ids", self.asset_id.as_str()),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let point = decode_price(&body, &self.asset_id)?;
        debug!(asset = %self.asset_id, price = point.price, "Fetched price");
        Ok(point)
    }
}
