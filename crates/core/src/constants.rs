/// Header rows above the first transaction row
pub const HEADER_ROWS: usize = 1;

/// Spreadsheet row number of the first transaction (1-based, after the header)
pub const DEFAULT_STARTING_ROW_INDEX: usize = HEADER_ROWS + 1;

/// Global ledger ids start right after this value
pub const LEDGER_BASE_ID: u64 = 1000;

/// Per-account ids start right after this value
pub const ACCOUNT_BASE_ID: u64 = 5000;

/// Currency of the tax column
pub const TAX_COIN: &str = "EUR";

/// Known account identifiers
pub const VALID_ACCOUNTS: [&str; 3] = ["m", "H", "p"];

/// Date format of string-typed date cells (day-month-year)
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Decimal precision for monetary values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
