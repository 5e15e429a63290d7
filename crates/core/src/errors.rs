//! Core error types for the chart pipeline.
//!
//! Everything raised while fetching and shaping data is a
//! [`MarketDataError`]; this type only adds the failures of the output side
//! (drawing and writing the artifact).

use stockviz_market_data::{MarketDataError, RetryClass};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the chart pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("Failed to write chart file: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Retry classification; output-side failures are never retried.
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Error::MarketData(e) => e.retry_class(),
            Error::Render(_) | Error::Io(_) => RetryClass::Never,
        }
    }
}
