//! Transactions module - sheet layout, row models, normalization and views.

mod columns;
mod ledger;
mod normalizer;
mod transaction_view;
mod transactions_errors;
mod transactions_model;



#[cfg(test)]
mod transaction_view_tests;

pub use columns::{Column, ColumnLayout};
pub use ledger::Ledger;
pub use normalizer::{normalize, NormalizerConfig, TransactionNormalizer};
pub use transaction_view::{stock_string, to_json, Transaction, TransactionJson};
pub use transactions_errors::{TransactionError, TransactionResult};
pub use transactions_model::{
    Cell, CellType, CellValue, Direction, LedgerEntry, ProvisionalEntry, RawRow, Tax, NO_TAX,
};
