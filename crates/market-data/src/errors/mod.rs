//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum shared by every pipeline stage
//! - [`NoDataReason`]: Why a request ended up with nothing to chart
//! - [`RetryClass`]: Classification for front ends deciding what to do next

mod retry;

pub use retry::RetryClass;

use chrono::NaiveDate;
use thiserror::Error;

/// Why a request produced no records.
///
/// The two causes are kept apart so callers can tell "the provider sent an
/// empty series" from "the date window matched nothing".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoDataReason {
    /// The provider answered with a time series that had zero entries.
    ProviderReturnedNothing,

    /// Records existed, but none fell inside the requested window.
    EmptyWindow {
        /// Inclusive window start
        start: NaiveDate,
        /// Inclusive window end
        end: NaiveDate,
    },
}

/// Errors that can occur anywhere in the fetch → parse → filter pipeline.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method. Nothing in the pipeline retries
/// on its own; the classification is for the caller.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider credential is not configured.
    /// Raised at the first fetch, before any network call.
    #[error(
        "{variable} environment variable is not set. \
         Please set your API key: export {variable}='your_key_here'"
    )]
    ConfigurationMissing {
        /// Name of the missing environment variable
        variable: String,
    },

    /// Caller input failed local validation (empty symbol, malformed date).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The request never produced a usable HTTP response
    /// (timeout, connection failure, non-success status).
    #[error("Transport error: {provider} - {message}")]
    Transport {
        /// The provider that was being contacted
        provider: String,
        /// What went wrong on the wire
        message: String,
    },

    /// The provider reported that the symbol does not exist.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider reported a call-frequency limit.
    #[error("Rate limited: {provider} - {message}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
        /// The provider's own wording
        message: String,
    },

    /// The response matched none of the known shapes.
    #[error("Unexpected response format: {message}. Received keys: {keys:?}")]
    UnexpectedResponse {
        /// Description of what was received
        message: String,
        /// Top-level keys present in the response body
        keys: Vec<String>,
    },

    /// The provider answered with an error or note that is neither an
    /// invalid-symbol report nor a rate limit.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A record is missing fields or carries values that are not numbers.
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// The window start lies after the window end.
    #[error("Start date ({start}) cannot be after end date ({end})")]
    InvalidRange {
        /// Requested start date
        start: NaiveDate,
        /// Requested end date
        end: NaiveDate,
    },

    /// Nothing left to chart.
    #[error("{}", no_data_message(.0))]
    NoDataAvailable(NoDataReason),
}

fn no_data_message(reason: &NoDataReason) -> String {
    match reason {
        NoDataReason::ProviderReturnedNothing => {
            "No data available: the provider returned an empty time series".to_string()
        }
        NoDataReason::EmptyWindow { start, end } => {
            format!("No data available between {} and {}", start, end)
        }
    }
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// - [`RetryClass::Never`]: the failure will repeat no matter what
    /// - [`RetryClass::WithBackoff`]: the same request may succeed later
    /// - [`RetryClass::ChangeInput`]: the user should pick another symbol or window
    ///
    /// # Examples
    ///
    /// ```
    /// use stockviz_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::RateLimited {
    ///     provider: "ALPHA_VANTAGE".to_string(),
    ///     message: "API call frequency exceeded".to_string(),
    /// };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = MarketDataError::SymbolNotFound("ZZZZZ".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::ChangeInput);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            // Transient - the same request may work later
            Self::RateLimited { .. } | Self::Transport { .. } => RetryClass::WithBackoff,

            // The user asked for something that cannot be served
            Self::InvalidInput(_)
            | Self::SymbolNotFound(_)
            | Self::InvalidRange { .. }
            | Self::NoDataAvailable(_) => RetryClass::ChangeInput,

            // Terminal
            Self::ConfigurationMissing { .. }
            | Self::UnexpectedResponse { .. }
            | Self::ProviderError { .. }
            | Self::MalformedData(_) => RetryClass::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_symbol_not_found_asks_for_new_input() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(error.retry_class(), RetryClass::ChangeInput);
    }

    #[test]
    fn test_rate_limited_retries_with_backoff() {
        let error = MarketDataError::RateLimited {
            provider: "ALPHA_VANTAGE".to_string(),
            message: "Thank you for using Alpha Vantage!".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_transport_retries_with_backoff() {
        let error = MarketDataError::Transport {
            provider: "ALPHA_VANTAGE".to_string(),
            message: "Request timed out".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_configuration_missing_never_retries() {
        let error = MarketDataError::ConfigurationMissing {
            variable: "ALPHA_VANTAGE_API_KEY".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_malformed_data_never_retries() {
        let error = MarketDataError::MalformedData("missing field '4. close'".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_window_errors_ask_for_new_input() {
        let error = MarketDataError::InvalidRange {
            start: date("2024-03-01"),
            end: date("2024-01-01"),
        };
        assert_eq!(error.retry_class(), RetryClass::ChangeInput);

        let error = MarketDataError::NoDataAvailable(NoDataReason::ProviderReturnedNothing);
        assert_eq!(error.retry_class(), RetryClass::ChangeInput);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = MarketDataError::InvalidRange {
            start: date("2024-03-01"),
            end: date("2024-01-01"),
        };
        assert_eq!(
            format!("{}", error),
            "Start date (2024-03-01) cannot be after end date (2024-01-01)"
        );

        let error = MarketDataError::NoDataAvailable(NoDataReason::EmptyWindow {
            start: date("2024-01-01"),
            end: date("2024-01-31"),
        });
        assert_eq!(
            format!("{}", error),
            "No data available between 2024-01-01 and 2024-01-31"
        );
    }

    #[test]
    fn test_unexpected_response_lists_keys() {
        let error = MarketDataError::UnexpectedResponse {
            message: "no time series".to_string(),
            keys: vec!["Meta Data".to_string(), "foo".to_string()],
        };
        let text = error.to_string();
        assert!(text.contains("Meta Data"));
        assert!(text.contains("foo"));
    }

    #[test]
    fn test_configuration_missing_mentions_remediation() {
        let error = MarketDataError::ConfigurationMissing {
            variable: "ALPHA_VANTAGE_API_KEY".to_string(),
        };
        let text = error.to_string();
        assert!(text.contains("ALPHA_VANTAGE_API_KEY environment variable is not set"));
        assert!(text.contains("export ALPHA_VANTAGE_API_KEY="));
    }
}
