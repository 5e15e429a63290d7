//! Date-window restriction of price records.

use chrono::NaiveDate;
use stockviz_market_data::{MarketDataError, NoDataReason, PriceRecord, DATE_FORMAT};

fn parse_bound(name: &str, value: &str) -> Result<NaiveDate, MarketDataError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        MarketDataError::InvalidInput(format!(
            "Invalid {} '{}': expected YYYY-MM-DD",
            name, value
        ))
    })
}

/// Parses and checks a `YYYY-MM-DD` window.
///
/// # Errors
///
/// [`MarketDataError::InvalidInput`] for a malformed bound,
/// [`MarketDataError::InvalidRange`] when the start is after the end.
pub fn parse_window(
    start_date: &str,
    end_date: &str,
) -> Result<(NaiveDate, NaiveDate), MarketDataError> {
    let start = parse_bound("start date", start_date)?;
    let end = parse_bound("end date", end_date)?;

    if start > end {
        return Err(MarketDataError::InvalidRange { start, end });
    }
    Ok((start, end))
}

/// Keeps the records whose calendar date lies in `[start_date, end_date]`.
///
/// Bounds are `YYYY-MM-DD` strings. The range is checked before anything
/// else, so an inverted window fails even when `records` is empty. The
/// result is sorted ascending by date.
///
/// Intraday records match on their calendar date alone: a bar at
/// `2024-01-31 15:00:00` is inside a window ending `2024-01-31`. The end
/// bound is not cut off at midnight.
///
/// # Errors
///
/// - [`MarketDataError::InvalidInput`] for a malformed bound
/// - [`MarketDataError::InvalidRange`] when `start_date > end_date`
/// - [`MarketDataError::NoDataAvailable`] when there were no records at all,
///   or none in the window
pub fn filter_by_date(
    records: Vec<PriceRecord>,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<PriceRecord>, MarketDataError> {
    let (start, end) = parse_window(start_date, end_date)?;

    if records.is_empty() {
        return Err(MarketDataError::NoDataAvailable(
            NoDataReason::ProviderReturnedNothing,
        ));
    }

    let mut kept: Vec<PriceRecord> = records
        .into_iter()
        .filter(|r| {
            let day = r.date.date();
            start <= day && day <= end
        })
        .collect();

    if kept.is_empty() {
        return Err(MarketDataError::NoDataAvailable(NoDataReason::EmptyWindow {
            start,
            end,
        }));
    }

    kept.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(kept)
}
