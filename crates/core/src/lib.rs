//! Netstocked Core - brokerage transaction normalization.
//!
//! Turns rows exported from a stock transactions spreadsheet into a
//! numbered ledger, and reconciles stock names with ISIN codes. Reading
//! the spreadsheet itself is left to the caller, which hands over rows of
//! typed cells.

pub mod constants;
pub mod errors;
pub mod identity;
pub mod transactions;
pub mod utils;

pub use identity::{shorthand, IsinCache};
pub use transactions::{Ledger, LedgerEntry, NormalizerConfig, TransactionNormalizer};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
