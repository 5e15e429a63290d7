//! Quote shaping module.
//!
//! This module turns the parsed provider records into chartable buckets:
//!
//! - [`filter`] - Restriction to an inclusive calendar-date window
//! - [`aggregate`] - Roll-up into daily, weekly or monthly buckets
//!
//! # Architecture
//!
//! ```text
//! Vec<PriceRecord> → filter_by_date → aggregate → Vec<AggregatedRecord>
//! ```
//!
//! Both stages are pure functions over owned data; no state survives a call.

pub mod aggregate;
pub mod filter;

pub use aggregate::{aggregate, AggregatedRecord, BucketLabel};
pub use filter::{filter_by_date, parse_window};
