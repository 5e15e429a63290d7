use std::fmt;

use serde::{Deserialize, Serialize};

/// Interval used for intraday requests when the caller does not pick one.
pub const DEFAULT_INTRADAY_INTERVAL: &str = "60min";

/// Granularity of the series requested from the provider, and of the
/// buckets the records are later rolled up into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Intraday,
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Resolution {
    /// Parses a resolution name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Resolution::Daily`]; callers rely on
    /// this leniency, so it is not an error.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "intraday" => Resolution::Intraday,
            "daily" => Resolution::Daily,
            "weekly" => Resolution::Weekly,
            "monthly" => Resolution::Monthly,
            _ => Resolution::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Intraday => "intraday",
            Resolution::Daily => "daily",
            Resolution::Weekly => "weekly",
            Resolution::Monthly => "monthly",
        }
    }

    /// Display name with a leading capital ("Weekly").
    pub fn title(&self) -> &'static str {
        match self {
            Resolution::Intraday => "Intraday",
            Resolution::Daily => "Daily",
            Resolution::Weekly => "Weekly",
            Resolution::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Resolution::parse_lenient("intraday"), Resolution::Intraday);
        assert_eq!(Resolution::parse_lenient("Weekly"), Resolution::Weekly);
        assert_eq!(Resolution::parse_lenient(" MONTHLY "), Resolution::Monthly);
        assert_eq!(Resolution::parse_lenient("daily"), Resolution::Daily);
    }

    #[test]
    fn test_unknown_falls_back_to_daily() {
        assert_eq!(Resolution::parse_lenient("hourly"), Resolution::Daily);
        assert_eq!(Resolution::parse_lenient(""), Resolution::Daily);
    }

    #[test]
    fn test_title() {
        assert_eq!(Resolution::Monthly.title(), "Monthly");
        assert_eq!(Resolution::Intraday.to_string(), "intraday");
    }
}
