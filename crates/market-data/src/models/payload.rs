use serde_json::{Map, Value};

/// Time-series section of a successful provider response.
///
/// Opaque to everything except the record parser: keys are date strings,
/// values are the provider's per-date field mappings, untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct RawTimeSeriesPayload {
    /// Name of the key the series was found under (e.g. "Time Series (Daily)")
    pub series_key: String,

    /// Date string → provider field mapping
    pub entries: Map<String, Value>,
}

impl RawTimeSeriesPayload {
    pub fn new(series_key: impl Into<String>, entries: Map<String, Value>) -> Self {
        Self {
            series_key: series_key.into(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
