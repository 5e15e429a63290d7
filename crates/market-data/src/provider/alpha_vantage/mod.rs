//! Alpha Vantage time-series provider implementation.
//!
//! This module provides historical prices from the Alpha Vantage API:
//! - Equities via TIME_SERIES_INTRADAY / DAILY / WEEKLY / MONTHLY endpoints
//! - Active listings via the LISTING_STATUS endpoint (CSV)
//!
//! Note: Alpha Vantage free tier is limited to 25 API calls per day.

mod listing;
mod response;

pub use listing::MAX_LISTINGS;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{
    RawTimeSeriesPayload, Resolution, Symbol, SymbolListing, DEFAULT_INTRADAY_INTERVAL,
};
use crate::provider::TimeSeriesProvider;

use listing::parse_listing_csv;
use response::classify_response;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";
pub(crate) const PROVIDER_ID: &str = "ALPHA_VANTAGE";

const DATA_TIMEOUT: Duration = Duration::from_secs(60);
const LISTING_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`AlphaVantageProvider`].
#[derive(Clone)]
pub struct AlphaVantageConfig {
    /// API key; `None` defers the failure to the first request.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Timeout for time-series requests
    pub data_timeout: Duration,
    /// Timeout for the listing request
    pub listing_timeout: Duration,
}

impl AlphaVantageConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            data_timeout: DATA_TIMEOUT,
            listing_timeout: LISTING_TIMEOUT,
        }
    }

    /// Reads the key from `ALPHA_VANTAGE_API_KEY`. A missing key is not an
    /// error here.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for AlphaVantageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("data_timeout", &self.data_timeout)
            .field("listing_timeout", &self.listing_timeout)
            .finish()
    }
}

/// Request line for logs. The key is never part of it, encoded or not.
fn redacted_request(base_url: &str, params: &[(&str, String)]) -> String {
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .chain(std::iter::once("apikey=***".to_string()))
        .collect();
    format!("{}?{}", base_url, query.join("&"))
}

/// Alpha Vantage time-series provider.
///
/// Issues exactly one GET per call and never retries.
pub struct AlphaVantageProvider {
    client: Client,
    config: AlphaVantageConfig,
}

impl AlphaVantageProvider {
    /// Create a new Alpha Vantage provider from the given settings.
    pub fn new(config: AlphaVantageConfig) -> Self {
        let client = Client::builder()
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Create a provider configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(AlphaVantageConfig::from_env())
    }

    fn api_key(&self) -> Result<&str, MarketDataError> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| MarketDataError::ConfigurationMissing {
                variable: API_KEY_ENV.to_string(),
            })
    }

    /// Function code and query parameters for a time-series request,
    /// without the key.
    fn time_series_params(
        symbol: &Symbol,
        resolution: Resolution,
        interval: Option<&str>,
    ) -> Vec<(&'static str, String)> {
        let function = match resolution {
            Resolution::Intraday => "TIME_SERIES_INTRADAY",
            Resolution::Daily => "TIME_SERIES_DAILY",
            Resolution::Weekly => "TIME_SERIES_WEEKLY",
            Resolution::Monthly => "TIME_SERIES_MONTHLY",
        };

        let mut params = vec![
            ("function", function.to_string()),
            ("symbol", symbol.to_string()),
            ("outputsize", "full".to_string()),
        ];

        if resolution == Resolution::Intraday {
            let interval = interval
                .map(str::trim)
                .filter(|i| !i.is_empty())
                .unwrap_or(DEFAULT_INTRADAY_INTERVAL);
            params.push(("interval", interval.to_string()));
            params.push(("adjusted", "true".to_string()));
        }

        params
    }

    /// Make a request to the Alpha Vantage API and return the body text.
    async fn fetch(
        &self,
        params: &[(&str, String)],
        timeout: Duration,
    ) -> Result<String, MarketDataError> {
        let api_key = self.api_key()?;

        let mut all_params: Vec<(&str, &str)> =
            params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        all_params.push(("apikey", api_key));

        let url = reqwest::Url::parse_with_params(&self.config.base_url, &all_params).map_err(
            |e| MarketDataError::Transport {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            },
        )?;

        debug!(
            "Alpha Vantage request: {}",
            redacted_request(&self.config.base_url, params)
        );

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    format!(
                        "Request timed out after {}s. Please check your internet connection and try again.",
                        timeout.as_secs()
                    )
                } else if e.is_connect() {
                    "Failed to connect to the API. Please check your internet connection and try again."
                        .to_string()
                } else {
                    format!("Error connecting to API: {}", e)
                };
                MarketDataError::Transport {
                    provider: PROVIDER_ID.to_string(),
                    message,
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::Transport {
                provider: PROVIDER_ID.to_string(),
                message: format!(
                    "HTTP {}. The API server may be experiencing issues.",
                    status
                ),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::Transport {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response body: {}", e),
            })
    }
}

#[async_trait]
impl TimeSeriesProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_time_series(
        &self,
        symbol: &Symbol,
        resolution: Resolution,
        interval: Option<&str>,
    ) -> Result<RawTimeSeriesPayload, MarketDataError> {
        let params = Self::time_series_params(symbol, resolution, interval);
        let body = self.fetch(&params, self.config.data_timeout).await?;
        let payload = classify_response(&body, symbol.as_str())?;

        debug!(
            "Alpha Vantage: fetched {} {} entries for {}",
            payload.len(),
            resolution,
            symbol
        );

        Ok(payload)
    }

    async fn list_symbols(&self) -> Result<Vec<SymbolListing>, MarketDataError> {
        let params = [("function", "LISTING_STATUS".to_string())];
        let body = self.fetch(&params, self.config.listing_timeout).await?;
        let listings = parse_listing_csv(&body)?;

        debug!("Alpha Vantage: loaded {} listings", listings.len());

        Ok(listings)
    }
}
