//! Stock index composition: abbreviation, full name and weight.
//!
//! Weight tables are semicolon-separated text blocks, one header line and
//! one `full name;abbreviation;weight` line per stock. A weight of `-`
//! means the weight is not published and is kept as [`Weight::Unknown`],
//! never folded into zero.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{MarketDataError, Result};

/// Placeholder used in weight tables for an unpublished weight.
pub const UNKNOWN_WEIGHT: &str = "-";

const FIELD_SEPARATOR: char = ';';
const FIELD_COUNT: usize = 3;

/// Weight of one stock inside its index, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum Weight {
    Known(Decimal),
    Unknown,
}

impl Weight {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Weight::Known(w) => Some(*w),
            Weight::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Weight::Unknown)
    }
}

impl From<Option<Decimal>> for Weight {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Weight::Unknown, Weight::Known)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Known(w) => write!(f, "{:.2}", w),
            Weight::Unknown => write!(f, "{}", UNKNOWN_WEIGHT),
        }
    }
}

/// Sum of an index's weights, with unpublished ones counted apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeightTotal {
    /// Sum of known positive weights
    pub known: Decimal,
    /// Number of entries whose weight is unknown
    pub unknown_count: usize,
}

/// Composition of one stock index.
#[derive(Debug, Clone)]
pub struct StockWeight {
    name: String,
    header: String,
    abbrevs: Vec<(String, Weight)>,
    abbrev_to_name: HashMap<String, String>,
}

impl StockWeight {
    /// Parses a weight table for the index called `name`.
    ///
    /// Fails on the first malformed line or on a repeated abbreviation.
    pub fn parse(name: &str, text: &str) -> Result<Self> {
        if name.is_empty() || !name.replace('-', "").chars().all(char::is_alphanumeric) {
            return Err(MarketDataError::InvalidIndexName(name.to_string()));
        }

        let mut lines = text.trim_matches('\n').lines();
        let header = lines.next().unwrap_or_default().trim_end_matches('\r');
        if header.split(FIELD_SEPARATOR).count() != FIELD_COUNT {
            return Err(invalid_line(name, 1, "header must have 3 fields"));
        }

        let mut index = Self {
            name: name.to_string(),
            header: header.to_string(),
            abbrevs: Vec::new(),
            abbrev_to_name: HashMap::new(),
        };

        for (pos, row) in lines.enumerate() {
            let line = pos + 2;
            let fields: Vec<&str> = row
                .trim_end_matches('\r')
                .split(FIELD_SEPARATOR)
                .map(str::trim)
                .collect();
            let &[full_name, abbrev, s_weight] = fields.as_slice() else {
                return Err(invalid_line(
                    name,
                    line,
                    format!("expected 3 fields, got {}", fields.len()),
                ));
            };
            if full_name.is_empty() || abbrev.is_empty() {
                return Err(invalid_line(name, line, "empty name or abbreviation"));
            }
            let weight = parse_weight(s_weight)
                .ok_or_else(|| invalid_line(name, line, format!("bad weight '{}'", s_weight)))?;

            if index.abbrev_to_name.contains_key(abbrev) {
                return Err(MarketDataError::DuplicateAbbreviation {
                    index: name.to_string(),
                    abbrev: abbrev.to_string(),
                });
            }
            index.abbrevs.push((abbrev.to_string(), weight));
            index
                .abbrev_to_name
                .insert(abbrev.to_string(), full_name.to_string());
        }

        debug!("Index {}: {} stocks", index.name, index.abbrevs.len());
        Ok(index)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Abbreviations with their weights, in table order.
    pub fn abbreviations(&self) -> &[(String, Weight)] {
        &self.abbrevs
    }

    pub fn abbrev_list(&self) -> Vec<&str> {
        self.abbrevs.iter().map(|(a, _)| a.as_str()).collect()
    }

    pub fn full_name(&self, abbrev: &str) -> Option<&str> {
        self.abbrev_to_name.get(abbrev).map(String::as_str)
    }

    /// Appends a stock to the index.
    ///
    /// The full name defaults to the abbreviation. The weight entry is
    /// appended even when the abbreviation already exists; in that case the
    /// name mapping is left alone and `false` is returned.
    pub fn add(&mut self, abbrev: &str, full_name: Option<&str>, weight: Option<Decimal>) -> bool {
        let name = full_name.unwrap_or(abbrev);
        self.abbrevs.push((abbrev.to_string(), Weight::from(weight)));
        if self.abbrev_to_name.contains_key(abbrev) {
            return false;
        }
        self.abbrev_to_name
            .insert(abbrev.to_string(), name.to_string());
        true
    }

    /// Every listed abbreviation resolves to a full name, and no two
    /// entries share one.
    pub fn validate(&self) -> bool {
        let mut names: HashSet<&str> = HashSet::new();
        for (abbrev, _) in &self.abbrevs {
            match self.full_name(abbrev) {
                Some(long_name) if names.insert(long_name) => {}
                _ => return false,
            }
        }
        true
    }

    pub fn total_weight(&self) -> WeightTotal {
        self.abbrevs
            .iter()
            .fold(WeightTotal::default(), |mut total, (_, weight)| {
                match weight {
                    Weight::Known(w) if *w > Decimal::ZERO => total.known += *w,
                    Weight::Known(_) => {}
                    Weight::Unknown => total.unknown_count += 1,
                }
                total
            })
    }
}

fn parse_weight(s_weight: &str) -> Option<Weight> {
    if s_weight == UNKNOWN_WEIGHT {
        return Some(Weight::Unknown);
    }
    Decimal::from_str(s_weight)
        .ok()
        .filter(|w| !w.is_sign_negative())
        .map(Weight::Known)
}

fn invalid_line(index: &str, line: usize, reason: impl Into<String>) -> MarketDataError {
    MarketDataError::InvalidWeightLine {
        index: index.to_string(),
        line,
        reason: reason.into(),
    }
}
