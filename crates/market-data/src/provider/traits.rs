//! Time-series provider trait definition.
//!
//! This module defines the `TimeSeriesProvider` trait that the chart
//! pipeline fetches through.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{RawTimeSeriesPayload, Resolution, Symbol, SymbolListing};

/// Trait for historical price sources.
///
/// Implementations own everything provider-specific: request building,
/// credentials, and interpreting the response shape. Callers only ever see
/// a [`RawTimeSeriesPayload`] or a classified [`MarketDataError`].
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockviz_market_data::provider::TimeSeriesProvider;
///
/// struct CannedProvider {
///     payload: RawTimeSeriesPayload,
/// }
///
/// #[async_trait]
/// impl TimeSeriesProvider for CannedProvider {
///     fn id(&self) -> &'static str {
///         "CANNED"
///     }
///
///     async fn fetch_time_series(
///         &self,
///         _symbol: &Symbol,
///         _resolution: Resolution,
///         _interval: Option<&str>,
///     ) -> Result<RawTimeSeriesPayload, MarketDataError> {
///         Ok(self.payload.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait TimeSeriesProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "ALPHA_VANTAGE".
    /// Used for logging and in error messages.
    fn id(&self) -> &'static str;

    /// Fetch the full time series for a symbol at the given resolution.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Normalized ticker
    /// * `resolution` - Series granularity; selects the provider endpoint
    /// * `interval` - Bar size for intraday requests (ignored otherwise)
    ///
    /// # Returns
    ///
    /// The untouched time-series section of the response, or a classified
    /// `MarketDataError`. Implementations issue at most one request and
    /// never retry.
    async fn fetch_time_series(
        &self,
        symbol: &Symbol,
        resolution: Resolution,
        interval: Option<&str>,
    ) -> Result<RawTimeSeriesPayload, MarketDataError>;

    /// List the securities this provider can chart.
    ///
    /// Default implementation returns an empty list, which callers treat
    /// the same as a failed listing.
    async fn list_symbols(&self) -> Result<Vec<SymbolListing>, MarketDataError> {
        Ok(Vec::new())
    }
}
