//! Roll-up of price records into period buckets.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use stockviz_market_data::{PriceRecord, RecordDate, Resolution};

/// Identifier of an aggregation bucket.
///
/// One of: the record's own date string (intraday, daily), an ISO week
/// `YYYY-Www` (weekly) or `YYYY-MM` (monthly). Every format is zero-padded,
/// so ordering the strings orders the buckets chronologically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BucketLabel(String);

impl BucketLabel {
    /// Label of the record's own date.
    pub fn for_date(date: &RecordDate) -> Self {
        Self(date.to_string())
    }

    /// ISO-8601 week label; the year is the ISO week-numbering year.
    pub fn iso_week(date: &RecordDate) -> Self {
        let week = date.date().iso_week();
        Self(format!("{:04}-W{:02}", week.year(), week.week()))
    }

    pub fn month(date: &RecordDate) -> Self {
        let day = date.date();
        Self(format!("{:04}-{:02}", day.year(), day.month()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// OHLC values of one bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AggregatedRecord {
    pub label: BucketLabel,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl AggregatedRecord {
    fn from_record(label: BucketLabel, record: &PriceRecord) -> Self {
        Self {
            label,
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
        }
    }

    /// Combines the members of one bucket. `members` must be non-empty and
    /// sorted ascending by date.
    fn combine(label: BucketLabel, members: &[PriceRecord]) -> Option<Self> {
        let first = members.first()?;
        let last = members.last()?;

        let high = members.iter().map(|r| r.high).max()?;
        let low = members.iter().map(|r| r.low).min()?;

        Some(Self {
            label,
            open: first.open,
            high,
            low,
            close: last.close,
        })
    }
}

/// Groups records into buckets at the given resolution.
///
/// Intraday and daily data pass through one record per bucket. Weekly and
/// monthly buckets take the first member's open, the last member's close,
/// and the extreme high and low. The output is sorted by label; empty in,
/// empty out.
pub fn aggregate(mut records: Vec<PriceRecord>, resolution: Resolution) -> Vec<AggregatedRecord> {
    records.sort_by(|a, b| a.date.cmp(&b.date));

    let bucket_of: fn(&RecordDate) -> BucketLabel = match resolution {
        Resolution::Intraday | Resolution::Daily => {
            return records
                .iter()
                .map(|r| AggregatedRecord::from_record(BucketLabel::for_date(&r.date), r))
                .collect();
        }
        Resolution::Weekly => BucketLabel::iso_week,
        Resolution::Monthly => BucketLabel::month,
    };

    // Members arrive in date order because `records` is sorted.
    let mut buckets: BTreeMap<BucketLabel, Vec<PriceRecord>> = BTreeMap::new();
    for record in records {
        buckets.entry(bucket_of(&record.date)).or_default().push(record);
    }

    buckets
        .into_iter()
        .filter_map(|(label, members)| AggregatedRecord::combine(label, &members))
        .collect()
}
