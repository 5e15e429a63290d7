use std::io::{self, Write};

use stockviz_core::Error;
use stockviz_market_data::{MarketDataError, RetryClass};

fn headline(error: &Error) -> &'static str {
    match error {
        Error::MarketData(e) => match e {
            MarketDataError::SymbolNotFound(_) => "Stock Symbol Not Found",
            MarketDataError::RateLimited { .. } => "API Rate Limit Exceeded",
            MarketDataError::NoDataAvailable(_) => "No Data Available",
            MarketDataError::InvalidInput(_) | MarketDataError::InvalidRange { .. } => {
                "Input Error"
            }
            MarketDataError::ConfigurationMissing { .. } => "Configuration Error",
            MarketDataError::Transport { .. } => "Network Error",
            MarketDataError::UnexpectedResponse { .. }
            | MarketDataError::ProviderError { .. }
            | MarketDataError::MalformedData(_) => "Error",
        },
        Error::Render(_) | Error::Io(_) => "Unexpected error occurred",
    }
}

fn tip(error: &Error) -> Option<&'static str> {
    let tip = match error {
        Error::MarketData(MarketDataError::SymbolNotFound(_)) => {
            "Make sure you're using the correct ticker symbol (e.g., AAPL, MSFT, GOOGL)"
        }
        Error::MarketData(MarketDataError::RateLimited { .. }) => {
            "The free tier allows a handful of calls per minute. Wait a minute and try again."
        }
        Error::MarketData(MarketDataError::NoDataAvailable(_)) => {
            "Try a wider date range, or a longer time series for older dates."
        }
        Error::MarketData(MarketDataError::ConfigurationMissing { .. }) => {
            "Get a free key at https://www.alphavantage.co/support/#api-key"
        }
        Error::MarketData(MarketDataError::Transport { .. }) => {
            "Check your internet connection and try again."
        }
        Error::Render(_) | Error::Io(_) => "Please report this error if it persists.",
        _ => return None,
    };
    Some(tip)
}

/// Prints a failed run: headline, the error itself, then what to do about it.
pub fn report_error<W: Write>(out: &mut W, error: &Error) -> io::Result<()> {
    writeln!(out, "\n\u{2717} {}:", headline(error))?;
    writeln!(out, "   {}", error)?;
    if let Some(tip) = tip(error) {
        writeln!(out, "\nTip: {}", tip)?;
    }
    match error.retry_class() {
        RetryClass::WithBackoff => writeln!(out, "The same request may succeed if retried later."),
        RetryClass::ChangeInput => writeln!(out, "Try a different symbol or date range."),
        RetryClass::Never => Ok(()),
    }
}
