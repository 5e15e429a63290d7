use chrono::NaiveDate;
use clap::Parser;
use stockviz_market_data::DATE_FORMAT;

/// Render stock price charts from Alpha Vantage data.
///
/// Any option left out is asked for interactively.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Ticker symbol (e.g. "IBM")
    #[arg(long)]
    pub symbol: Option<String>,

    /// Chart type
    #[arg(long, value_parser = ["line", "bar", "stacked_bar", "xy"])]
    pub chart_type: Option<String>,

    /// Time series function
    #[arg(long, value_parser = ["intraday", "daily", "weekly", "monthly"])]
    pub time_series: Option<String>,

    /// First day of the window, YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Last day of the window, YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Intraday interval: 1min, 5min, 15min, 30min or 60min
    #[arg(long)]
    pub interval: Option<String>,
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| format!("'{}' is not a date in YYYY-MM-DD format", s))
}
