use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Provider format for daily (and coarser) keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Provider format for intraday keys.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date of a price record.
///
/// Daily, weekly and monthly series are keyed by calendar date; intraday
/// series carry a time of day as well. Ordering is chronological, and a
/// plain date sorts before any time on that same day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordDate {
    Day(NaiveDate),
    DateTime(NaiveDateTime),
}

impl RecordDate {
    /// Parses `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(RecordDate::Day)
            .or_else(|_| NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT).map(RecordDate::DateTime))
            .ok()
    }

    /// Calendar date, dropping any time of day.
    pub fn date(&self) -> NaiveDate {
        match self {
            RecordDate::Day(d) => *d,
            RecordDate::DateTime(dt) => dt.date(),
        }
    }
}

impl PartialOrd for RecordDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let key = |d: &RecordDate| match d {
            RecordDate::Day(d) => (*d, None),
            RecordDate::DateTime(dt) => (dt.date(), Some(dt.time())),
        };
        key(self).cmp(&key(other))
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDate::Day(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            RecordDate::DateTime(dt) => write!(f, "{}", dt.format(DATE_TIME_FORMAT)),
        }
    }
}

impl Serialize for RecordDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One OHLC observation as delivered by the provider.
///
/// Values are never mutated after parsing. The usual OHLC invariants
/// (high is the largest, low the smallest) are assumed, not checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PriceRecord {
    pub date: RecordDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl PriceRecord {
    pub fn new(date: RecordDate, open: Decimal, high: Decimal, low: Decimal, close: Decimal) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }
}
