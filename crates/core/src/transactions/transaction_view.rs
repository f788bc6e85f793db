//! Display and JSON view of ledger entries.

use std::fmt;

use chrono::NaiveDate;
use log::warn;
use netstocked_market_data::isin;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use super::transactions_model::{Direction, LedgerEntry};
use crate::identity::{shorthand, IsinCache};
use crate::utils::{iso_date, money_string};
use crate::Result;

/// Width of the stock name column in text listings
const NAME_WIDTH: usize = 16;

/// Names longer than this are truncated
const NAME_MAX: usize = 14;

/// A ledger entry with its stock name reconciled against the ISIN cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: u64,
    pub date: NaiveDate,
    pub direction: Direction,
    pub quantity: i64,
    /// Signed value rounded to cents, negative for sales
    pub total: Decimal,
    name: String,
    isin: String,
}

/// JSON element of a transaction.
///
/// Field order is alphabetical so the rendered object has sorted keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionJson {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Id")]
    pub id: u64,
    #[serde(rename = "Op")]
    pub op: Direction,
    #[serde(rename = "Quant")]
    pub quant: f64,
    #[serde(rename = "StockName")]
    pub stock_name: String,
    #[serde(rename = "Total")]
    pub total: f64,
}

impl Transaction {
    /// Builds the view of `entry`, registering its name/ISIN pair.
    ///
    /// An ISIN with a wrong check digit or length never reaches the cache;
    /// the name is then looked up as if the ISIN were blank. When the cache
    /// already knows the name under another ISIN, the cached ISIN is kept.
    pub fn from_entry(entry: &LedgerEntry, cache: &mut IsinCache) -> Self {
        let isin = match entry.isin.as_deref() {
            Some(code) if isin::is_valid(code) => code,
            Some(code) => {
                warn!(
                    "{}: ISIN '{}' of '{}' is not valid",
                    entry.line_marker(),
                    code,
                    entry.product
                );
                ""
            }
            None => "",
        };
        let (name, isin) = cache.update(&entry.product, isin);
        Self {
            id: entry.id,
            date: entry.date,
            direction: entry.direction,
            quantity: entry.quantity,
            total: entry.value,
            name,
            isin,
        }
    }

    /// Product name as reconciled by the cache.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn isin(&self) -> &str {
        &self.isin
    }

    /// Well-known short name when there is one, else the product name.
    pub fn stock_name(&self) -> &str {
        match shorthand(&self.isin) {
            "" => &self.name,
            short => short,
        }
    }

    pub fn json_elem(&self) -> TransactionJson {
        TransactionJson {
            date: iso_date(self.date),
            id: self.id,
            op: self.direction,
            quant: self.quantity as f64,
            stock_name: self.stock_name().to_string(),
            total: self.total.to_f64().unwrap_or_default(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6} {} {:<4} {} {:7}x {}",
            self.id,
            iso_date(self.date),
            self.direction,
            stock_string(&self.name),
            self.quantity,
            money_string(self.total)
        )
    }
}

/// Fixed-width name column: padded with `_`, long names cut and ended with `.`.
pub fn stock_string(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() > NAME_MAX {
        let mut shown: String = chars[..NAME_MAX].iter().collect();
        shown.push_str("_.");
        return shown;
    }
    format!("{:_<width$}", name, width = NAME_WIDTH)
}

/// Renders transactions as pretty JSON with sorted keys and a trailing
/// newline.
pub fn to_json(transactions: &[Transaction]) -> Result<String> {
    let elems: Vec<TransactionJson> = transactions.iter().map(Transaction::json_elem).collect();
    let mut out = serde_json::to_string_pretty(&elems)?;
    out.push('\n');
    Ok(out)
}
