//! Conversion of the raw provider payload into [`PriceRecord`]s.

use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::{PriceRecord, RawTimeSeriesPayload, RecordDate};

const OPEN: &str = "1. open";
const HIGH: &str = "2. high";
const LOW: &str = "3. low";
const CLOSE: &str = "4. close";

/// Parses every entry of the payload into a record, sorted ascending by date.
///
/// An empty payload gives an empty vector. Any bad entry fails the whole
/// payload with [`MarketDataError::MalformedData`].
pub fn parse_records(payload: RawTimeSeriesPayload) -> Result<Vec<PriceRecord>, MarketDataError> {
    let mut records = payload
        .entries
        .iter()
        .map(|(key, fields)| parse_entry(key, fields))
        .collect::<Result<Vec<_>, _>>()?;

    records.sort_by(|a, b| a.date.cmp(&b.date));

    debug!(
        "Parsed {} records from '{}'",
        records.len(),
        payload.series_key
    );

    Ok(records)
}

fn parse_entry(key: &str, fields: &Value) -> Result<PriceRecord, MarketDataError> {
    let date = RecordDate::parse(key)
        .ok_or_else(|| MarketDataError::MalformedData(format!("invalid date key '{}'", key)))?;

    let fields = fields.as_object().ok_or_else(|| {
        MarketDataError::MalformedData(format!("entry for {} is not an object", key))
    })?;

    let field = |name: &str| -> Result<Decimal, MarketDataError> {
        let value = fields.get(name).ok_or_else(|| {
            MarketDataError::MalformedData(format!("missing field '{}' for {}", name, key))
        })?;
        parse_decimal(value).ok_or_else(|| {
            MarketDataError::MalformedData(format!(
                "field '{}' for {} is not a number: {}",
                name, key, value
            ))
        })
    };

    Ok(PriceRecord::new(
        date,
        field(OPEN)?,
        field(HIGH)?,
        field(LOW)?,
        field(CLOSE)?,
    ))
}

/// Accepts JSON strings and numbers, in plain or scientific notation.
fn parse_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
