//! Stockviz Market Data Crate
//!
//! This crate fetches historical price series from a remote quote provider
//! and turns them into normalized OHLC records.
//!
//! # Overview
//!
//! - Provider seam ([`TimeSeriesProvider`]) with an Alpha Vantage implementation
//! - Response classification into a single error taxonomy ([`MarketDataError`])
//! - Record parsing ([`parse_records`]) into [`PriceRecord`]s
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |  Symbol + Res.   | --> |  TimeSeriesProvider  |  (one GET, classified)
//! +------------------+     +----------------------+
//!                                     |
//!                                     v
//!                          +----------------------+
//!                          | RawTimeSeriesPayload |  (provider-shaped)
//!                          +----------------------+
//!                                     |
//!                                     v
//!                          +----------------------+
//!                          |    parse_records     |
//!                          +----------------------+
//!                                     |
//!                                     v
//!                          +----------------------+
//!                          |  Vec<PriceRecord>    |  (ascending by date)
//!                          +----------------------+
//! ```

pub mod errors;
pub mod models;
pub mod parser;
pub mod provider;

pub use errors::{MarketDataError, NoDataReason, RetryClass};

pub use models::{
    PriceRecord, RawTimeSeriesPayload, RecordDate, Resolution, Symbol, SymbolListing,
    DATE_FORMAT, DATE_TIME_FORMAT, DEFAULT_INTRADAY_INTERVAL,
};

pub use parser::parse_records;

pub use provider::alpha_vantage::{AlphaVantageConfig, AlphaVantageProvider};
pub use provider::TimeSeriesProvider;
