//! Error types for the market data crate.
//!
//! Malformed reference data (a bad weight line, a duplicate abbreviation,
//! an ISIN admitted twice) and lookup misses are reported through
//! [`MarketDataError`]. Advisory inconsistencies such as duplicate symbols
//! are returned as plain lists by the owning type instead.

use thiserror::Error;

/// Errors that can occur while building or querying reference data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// The ISIN is not present in the resolution index.
    #[error("ISIN not found: {0}")]
    IsinNotFound(String),

    /// The market code has never been added.
    #[error("Market not found: {0}")]
    MarketNotFound(String),

    /// An ISIN was admitted twice. Duplicate ISINs across markets are a
    /// data error, the whole market batch is rejected.
    #[error("Duplicate ISIN {isin} while adding market {market}")]
    DuplicateIsin {
        /// The repeated code
        isin: String,
        /// The market being added
        market: String,
    },

    /// An abbreviation appears twice in one stock index.
    #[error("Duplicate abbreviation '{abbrev}' in index {index}")]
    DuplicateAbbreviation {
        /// Stock index name
        index: String,
        /// The repeated abbreviation
        abbrev: String,
    },

    /// Stock index names are alphanumeric, dashes allowed.
    #[error("Invalid stock index name: '{0}'")]
    InvalidIndexName(String),

    /// A weight table line could not be parsed.
    #[error("Index {index}, line {line}: {reason}")]
    InvalidWeightLine {
        /// Stock index name
        index: String,
        /// 1-based line number inside the text block
        line: usize,
        /// What went wrong
        reason: String,
    },
}

impl MarketDataError {
    /// Whether this error is a lookup miss rather than bad data.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MarketDataError::IsinNotFound(_) | MarketDataError::MarketNotFound(_)
        )
    }
}

/// Type alias for Result using [`MarketDataError`].
pub type Result<T> = std::result::Result<T, MarketDataError>;
