//! Stockviz Core - Date filtering, period aggregation and chart output.
//!
//! This crate turns the records produced by `stockviz-market-data` into
//! charts. It never sees provider field names; everything here works on
//! normalized [`PriceRecord`](stockviz_market_data::PriceRecord)s.

pub mod charts;
pub mod errors;
pub mod pipeline;
pub mod quotes;
pub mod symbols;

pub use charts::{ChartKind, ChartRenderer, ChartSeriesModel, SvgChartRenderer};
pub use pipeline::{ChartRequest, ChartService, RenderedChart};
pub use symbols::{fallback_symbols, load_symbols};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
