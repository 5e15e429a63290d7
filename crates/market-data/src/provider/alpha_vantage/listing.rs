//! `LISTING_STATUS` CSV parsing.

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::SymbolListing;

/// Upper bound on the number of listings handed to a picker.
pub const MAX_LISTINGS: usize = 1000;

const MAX_SYMBOL_LEN: usize = 5;

/// One row of the listing CSV. The provider also sends exchange, asset type
/// and IPO/delisting dates; only these three matter here.
#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    status: String,
}

/// Parses the listing CSV into picker entries.
///
/// Keeps active rows with both a symbol and a name, sorted by symbol,
/// restricted to plain tickers of at most five letters, capped at
/// [`MAX_LISTINGS`].
pub(crate) fn parse_listing_csv(body: &str) -> Result<Vec<SymbolListing>, MarketDataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut listings = Vec::new();
    for row in reader.deserialize::<ListingRow>() {
        let row = row.map_err(|e| MarketDataError::MalformedData(format!("listing CSV: {}", e)))?;
        if row.status == "Active" && !row.symbol.is_empty() && !row.name.is_empty() {
            listings.push(SymbolListing::new(row.symbol, row.name));
        }
    }

    listings.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    listings.retain(|listing| is_plain_ticker(&listing.symbol));
    listings.truncate(MAX_LISTINGS);

    Ok(listings)
}

fn is_plain_ticker(symbol: &str) -> bool {
    symbol.len() <= MAX_SYMBOL_LEN && symbol.chars().all(|c| c.is_ascii_alphabetic())
}
