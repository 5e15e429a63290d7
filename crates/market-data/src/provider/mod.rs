//! Time-series provider abstraction and the Alpha Vantage implementation.
//!
//! This module contains:
//! - The `TimeSeriesProvider` trait the pipeline fetches through
//! - The Alpha Vantage client, its response classification and its
//!   `LISTING_STATUS` parser
//!
//! Provider field names and error shapes stay inside this module and the
//! record parser; nothing downstream sees them.

mod traits;

pub mod alpha_vantage;

pub use traits::TimeSeriesProvider;
