//! Market data models
//!
//! This module contains the data types shared by the provider and the parser:
//! - `symbol` - Ticker newtype (Symbol) and listing entries (SymbolListing)
//! - `resolution` - Requested series granularity (Resolution)
//! - `payload` - Raw provider time-series section (RawTimeSeriesPayload)
//! - `record` - Normalized OHLC observations (PriceRecord, RecordDate)

mod payload;
mod record;
mod resolution;
mod symbol;

pub use payload::RawTimeSeriesPayload;
pub use record::{PriceRecord, RecordDate, DATE_FORMAT, DATE_TIME_FORMAT};
pub use resolution::{Resolution, DEFAULT_INTRADAY_INTERVAL};
pub use symbol::{Symbol, SymbolListing};
