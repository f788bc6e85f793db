use serde::{Deserialize, Serialize};

/// Symbol value meaning "no trading symbol". Exempt from uniqueness checks.
pub const NO_SYMBOL: &str = "-";

/// One listed equity as published by a market: (coin, ISIN, symbol, name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    /// Trading currency
    pub coin: String,
    pub isin: String,
    /// Ticker, or [`NO_SYMBOL`]
    pub symbol: String,
    pub name: String,
}

impl StockRecord {
    pub fn new(
        coin: impl Into<String>,
        isin: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            coin: coin.into(),
            isin: isin.into(),
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    /// Whether the record carries a real trading symbol.
    pub fn has_symbol(&self) -> bool {
        !self.symbol.is_empty() && self.symbol != NO_SYMBOL
    }
}

impl<C, I, S, N> From<(C, I, S, N)> for StockRecord
where
    C: Into<String>,
    I: Into<String>,
    S: Into<String>,
    N: Into<String>,
{
    fn from((coin, isin, symbol, name): (C, I, S, N)) -> Self {
        Self::new(coin, isin, symbol, name)
    }
}

/// What an ISIN resolves to: (symbol, name), plus the market it was
/// admitted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockIdentity {
    pub symbol: String,
    pub name: String,
    pub market: String,
}
