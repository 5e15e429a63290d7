use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Ticker symbol as sent to the provider: trimmed, upper-cased, non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Normalizes raw user input into a ticker.
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::InvalidInput`] if nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self, MarketDataError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MarketDataError::InvalidInput(
                "Symbol cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A listed security, as shown in a symbol picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolListing {
    pub symbol: String,
    pub name: String,
}

impl SymbolListing {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_is_trimmed_and_uppercased() {
        let symbol = Symbol::parse("  aapl ").unwrap();
        assert_eq!(symbol.as_str(), "AAPL");
        assert_eq!(symbol.to_string(), "AAPL");
    }

    #[test]
    fn test_empty_symbol_is_invalid_input() {
        assert!(matches!(
            Symbol::parse(""),
            Err(MarketDataError::InvalidInput(_))
        ));
        assert!(matches!(
            Symbol::parse("   \t"),
            Err(MarketDataError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_symbol_serializes_as_string() {
        let symbol = Symbol::parse("msft").unwrap();
        assert_eq!(serde_json::to_string(&symbol).unwrap(), "\"MSFT\"");
    }
}
