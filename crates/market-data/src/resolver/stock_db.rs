//! Stock database: per-market equity lists and ISIN resolution.
//!
//! Markets are admitted atomically. Every record of a batch is checked
//! before anything is stored, so a rejected market leaves both the market
//! list and the ISIN index exactly as they were.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, warn};

use crate::errors::{MarketDataError, Result};
use crate::isin;
use crate::models::{StockIdentity, StockRecord};

#[derive(Debug, Default)]
pub struct StockDb {
    markets: BTreeMap<String, Vec<StockRecord>>,
    isin_ref: HashMap<String, StockIdentity>,
}

impl StockDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the equity list of one market.
    ///
    /// Returns `Ok(false)` without storing anything when any record has an
    /// invalid ISIN. An ISIN that is already indexed, or repeated inside
    /// the batch, is a [`MarketDataError::DuplicateIsin`].
    pub fn add_market<I, R>(&mut self, market: &str, records: I) -> Result<bool>
    where
        I: IntoIterator<Item = R>,
        R: Into<StockRecord>,
    {
        let stocks: Vec<StockRecord> = records.into_iter().map(Into::into).collect();

        if let Some(bad) = stocks.iter().find(|s| !isin::is_valid(&s.isin)) {
            warn!(
                "Market {} rejected: invalid ISIN '{}' for '{}'",
                market, bad.isin, bad.name
            );
            return Ok(false);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(stocks.len());
        for stock in &stocks {
            if self.isin_ref.contains_key(&stock.isin) || !seen.insert(stock.isin.as_str()) {
                return Err(MarketDataError::DuplicateIsin {
                    isin: stock.isin.clone(),
                    market: market.to_string(),
                });
            }
        }

        for stock in &stocks {
            self.isin_ref.insert(
                stock.isin.clone(),
                StockIdentity {
                    symbol: stock.symbol.clone(),
                    name: stock.name.clone(),
                    market: market.to_string(),
                },
            );
        }
        debug!("Market {}: {} stocks admitted", market, stocks.len());
        self.markets
            .entry(market.to_string())
            .or_default()
            .extend(stocks);
        Ok(true)
    }

    /// Symbol and name for an ISIN.
    pub fn resolve(&self, isin: &str) -> Result<&StockIdentity> {
        self.isin_ref
            .get(isin)
            .ok_or_else(|| MarketDataError::IsinNotFound(isin.to_string()))
    }

    pub fn contains(&self, isin: &str) -> bool {
        self.isin_ref.contains_key(isin)
    }

    /// Admitted market codes, sorted.
    pub fn markets(&self) -> Vec<&str> {
        self.markets.keys().map(String::as_str).collect()
    }

    /// Records of one market, in admission order.
    pub fn stocks(&self, market: &str) -> Result<&[StockRecord]> {
        self.markets
            .get(market)
            .map(Vec::as_slice)
            .ok_or_else(|| MarketDataError::MarketNotFound(market.to_string()))
    }

    /// Symbols used by more than one stock of a market.
    ///
    /// Advisory only: symbol clashes are reported, never rejected. The
    /// "no symbol" placeholder is ignored.
    pub fn duplicate_symbols(&self, market: &str) -> Result<Vec<String>> {
        let mut seen: HashMap<&str, &StockRecord> = HashMap::new();
        let mut dups = Vec::new();
        for stock in self.stocks(market)? {
            if !stock.has_symbol() {
                continue;
            }
            if let Some(first) = seen.get(stock.symbol.as_str()) {
                warn!(
                    "Duplicate symbol '{}', ISIN {}: first seen as {}",
                    stock.symbol, stock.isin, first.isin
                );
                dups.push(stock.symbol.clone());
            } else {
                seen.insert(stock.symbol.as_str(), stock);
            }
        }
        Ok(dups)
    }

    pub fn len(&self) -> usize {
        self.isin_ref.len()
    }

    pub fn is_empty(&self) -> bool {
        self.isin_ref.is_empty()
    }
}
