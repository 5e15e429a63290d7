//! Classification of Alpha Vantage response bodies.
//!
//! Alpha Vantage answers almost every request with HTTP 200 and signals
//! failures through the JSON body, so the body shape decides the outcome.

use log::warn;
use serde_json::{Map, Value};

use super::PROVIDER_ID;
use crate::errors::MarketDataError;
use crate::models::RawTimeSeriesPayload;

const SERIES_MARKER: &str = "Time Series";
const ERROR_MESSAGE_KEY: &str = "Error Message";
const NOTE_KEY: &str = "Note";
const INFORMATION_KEY: &str = "Information";

/// Turns a response body into the time-series payload or a classified error.
///
/// A key containing "Time Series" wins over any error key present alongside it.
pub(crate) fn classify_response(
    body: &str,
    symbol: &str,
) -> Result<RawTimeSeriesPayload, MarketDataError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| MarketDataError::UnexpectedResponse {
            message: format!("Response is not valid JSON ({})", e),
            keys: Vec::new(),
        })?;

    let Value::Object(mut object) = value else {
        return Err(MarketDataError::UnexpectedResponse {
            message: "Response is not a JSON object".to_string(),
            keys: Vec::new(),
        });
    };

    let series_key = object
        .keys()
        .find(|key| key.contains(SERIES_MARKER))
        .cloned();

    if let Some(series_key) = series_key {
        return match object.remove(&series_key) {
            Some(Value::Object(entries)) => Ok(RawTimeSeriesPayload::new(series_key, entries)),
            _ => Err(MarketDataError::MalformedData(format!(
                "'{}' is not a mapping of dates to prices",
                series_key
            ))),
        };
    }

    Err(classify_error_body(&object, symbol))
}

fn classify_error_body(object: &Map<String, Value>, symbol: &str) -> MarketDataError {
    if let Some(msg) = text_field(object, ERROR_MESSAGE_KEY) {
        if msg.contains("Invalid API call") || msg.contains("Invalid stock symbol") {
            return MarketDataError::SymbolNotFound(symbol.to_string());
        }
        return provider_error(format!("API error: {}", msg));
    }

    // "Note" usually indicates rate limiting
    if let Some(msg) = text_field(object, NOTE_KEY) {
        if is_rate_limit_message(&msg) {
            return rate_limited(msg);
        }
        warn!("Alpha Vantage note: {}", msg);
        return provider_error(format!("API note: {}", msg));
    }

    if let Some(msg) = text_field(object, INFORMATION_KEY) {
        if is_rate_limit_message(&msg) {
            return rate_limited(msg);
        }
        warn!("Alpha Vantage info: {}", msg);
        return provider_error(format!("API info: {}", msg));
    }

    let mut keys: Vec<String> = object.keys().cloned().collect();
    keys.sort();
    MarketDataError::UnexpectedResponse {
        message: "No time series in response".to_string(),
        keys,
    }
}

fn is_rate_limit_message(msg: &str) -> bool {
    msg.contains("API call frequency") || msg.to_lowercase().contains("rate limit")
}

/// Error fields are normally strings; anything else is rendered as JSON.
fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).map(|value| match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn provider_error(message: String) -> MarketDataError {
    MarketDataError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message,
    }
}

fn rate_limited(message: String) -> MarketDataError {
    MarketDataError::RateLimited {
        provider: PROVIDER_ID.to_string(),
        message,
    }
}
