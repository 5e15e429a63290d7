//! Symbol directory for pickers.

use log::{info, warn};
use stockviz_market_data::{SymbolListing, TimeSeriesProvider};

/// Large-cap tickers offered when the provider listing is unavailable.
const FALLBACK_SYMBOLS: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc. Class A"),
    ("GOOG", "Alphabet Inc. Class C"),
    ("AMZN", "Amazon.com Inc."),
    ("TSLA", "Tesla Inc."),
    ("META", "Meta Platforms Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("JPM", "JPMorgan Chase & Co."),
    ("V", "Visa Inc."),
    ("WMT", "Walmart Inc."),
    ("JNJ", "Johnson & Johnson"),
    ("PG", "Procter & Gamble Co."),
    ("UNH", "UnitedHealth Group Inc."),
    ("MA", "Mastercard Inc."),
    ("HD", "Home Depot Inc."),
    ("DIS", "The Walt Disney Company"),
    ("BAC", "Bank of America Corp."),
    ("XOM", "Exxon Mobil Corporation"),
    ("PFE", "Pfizer Inc."),
    ("ABBV", "AbbVie Inc."),
    ("KO", "The Coca-Cola Company"),
    ("COST", "Costco Wholesale Corporation"),
    ("AVGO", "Broadcom Inc."),
    ("PEP", "PepsiCo Inc."),
    ("TMO", "Thermo Fisher Scientific"),
    ("MRK", "Merck & Co. Inc."),
    ("CSCO", "Cisco Systems Inc."),
    ("ABT", "Abbott Laboratories"),
    ("ACN", "Accenture plc"),
    ("LLY", "Eli Lilly and Company"),
    ("DHR", "Danaher Corporation"),
    ("NKE", "NIKE Inc."),
    ("VZ", "Verizon Communications"),
    ("ADBE", "Adobe Inc."),
    ("NEE", "NextEra Energy Inc."),
    ("CMCSA", "Comcast Corporation"),
    ("TXN", "Texas Instruments"),
    ("INTC", "Intel Corporation"),
    ("CRM", "Salesforce Inc."),
    ("UNP", "Union Pacific Corporation"),
    ("PM", "Philip Morris International"),
    ("BMY", "Bristol-Myers Squibb"),
    ("RTX", "Raytheon Technologies"),
    ("T", "AT&T Inc."),
    ("HON", "Honeywell International"),
    ("QCOM", "QUALCOMM Incorporated"),
    ("LOW", "Lowe's Companies Inc."),
    ("UPS", "United Parcel Service"),
    ("AMGN", "Amgen Inc."),
    ("ORCL", "Oracle Corporation"),
];

pub fn fallback_symbols() -> Vec<SymbolListing> {
    FALLBACK_SYMBOLS
        .iter()
        .map(|(symbol, name)| SymbolListing::new(*symbol, *name))
        .collect()
}

/// Loads the provider's listing, or the fallback table if that fails or
/// comes back empty. Never fails.
pub async fn load_symbols(provider: &dyn TimeSeriesProvider) -> Vec<SymbolListing> {
    match provider.list_symbols().await {
        Ok(listings) if !listings.is_empty() => {
            info!(
                "Loaded {} stock symbols from {}",
                listings.len(),
                provider.id()
            );
            listings
        }
        Ok(_) => {
            warn!("{} returned no symbols, using fallback list", provider.id());
            fallback_symbols()
        }
        Err(e) => {
            warn!("Could not load symbols from {}: {}. Using fallback list", provider.id(), e);
            fallback_symbols()
        }
    }
}
