use thiserror::Error;

/// Errors raised while normalizing transaction rows.
///
/// Every malformed-input variant carries the spreadsheet row number so the
/// first offending row can be fixed at the source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Row {row}: has {found} columns, expected {expected}")]
    ColumnCount {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Row {row}: missing column {column}")]
    MissingColumn { row: usize, column: &'static str },

    #[error("Row {row}: unsupported date cell type '{tag}'")]
    UnsupportedDateType { row: usize, tag: char },

    #[error("Row {row}: invalid date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error("Row {row}: wrong quantity type: {value}")]
    NonIntegerQuantity { row: usize, value: String },

    #[error("Row {row}: column {column} is not a number: {value}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Row {row}: value out of range for {quantity} x {unit_price}")]
    ValueOverflow {
        row: usize,
        quantity: i64,
        unit_price: String,
    },

    #[error("Row {row}: ledger id out of range")]
    IdOverflow { row: usize },

    #[error("Row {row}: unknown account '{account}'")]
    UnknownAccount { row: usize, account: String },

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Inconsistent ledger: {0}")]
    Inconsistent(String),

    #[error("Invalid normalizer configuration: {0}")]
    InvalidConfig(String),
}

impl TransactionError {
    /// Spreadsheet row the error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            TransactionError::ColumnCount { row, .. }
            | TransactionError::MissingColumn { row, .. }
            | TransactionError::UnsupportedDateType { row, .. }
            | TransactionError::InvalidDate { row, .. }
            | TransactionError::NonIntegerQuantity { row, .. }
            | TransactionError::InvalidNumber { row, .. }
            | TransactionError::ValueOverflow { row, .. }
            | TransactionError::IdOverflow { row }
            | TransactionError::UnknownAccount { row, .. } => Some(*row),
            TransactionError::AccountNotFound(_)
            | TransactionError::Inconsistent(_)
            | TransactionError::InvalidConfig(_) => None,
        }
    }
}

/// Result of a normalization step.
pub type TransactionResult<T> = std::result::Result<T, TransactionError>;
