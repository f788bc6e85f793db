//! Row normalization: raw sheet rows to a numbered ledger.
//!
//! The whole batch is checked for column completeness first; the first
//! malformed row aborts the batch. Rows are then parsed in sheet order and
//! numbered oldest first (see [`Ledger`]).

use std::str::FromStr;

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::columns::{Column, ColumnLayout};
use super::ledger::Ledger;
use super::transactions_errors::{TransactionError, TransactionResult};
use super::transactions_model::{
    Cell, CellType, CellValue, Direction, ProvisionalEntry, RawRow, Tax, NO_TAX,
};
use crate::constants::{
    ACCOUNT_BASE_ID, DEFAULT_DATE_FORMAT, DEFAULT_STARTING_ROW_INDEX, DISPLAY_DECIMAL_PRECISION,
    LEDGER_BASE_ID, TAX_COIN, VALID_ACCOUNTS,
};
use crate::utils::{money_string, parse_date};
use crate::Result;

/// Configuration for transaction normalization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NormalizerConfig {
    /// Sheet row number of the first data row (default: 2)
    pub starting_row_index: Option<usize>,
    /// Global ids start after this value (default: 1000)
    pub ledger_base_id: Option<u64>,
    /// Per-account ids start after this value (default: 5000)
    pub account_base_id: Option<u64>,
    /// Currency recorded with tax amounts (default: "EUR")
    pub tax_currency: Option<String>,
    /// Known account identifiers (default: "m", "H", "p")
    pub accounts: Option<Vec<String>>,
    /// Format of string-typed date cells (default: "%d-%m-%Y")
    pub date_format: Option<String>,
}

impl NormalizerConfig {
    /// Reads a configuration from JSON; missing keys take their defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: NormalizerConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values a normalization pass relies on.
    pub fn validate(&self) -> TransactionResult<()> {
        if self.starting_row() == 0 {
            return Err(TransactionError::InvalidConfig(
                "startingRowIndex is 1-based".to_string(),
            ));
        }
        if self.account_ids().is_empty() {
            return Err(TransactionError::InvalidConfig(
                "at least one account is required".to_string(),
            ));
        }
        if self.tax_coin().is_empty() {
            return Err(TransactionError::InvalidConfig(
                "taxCurrency is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn starting_row(&self) -> usize {
        self.starting_row_index.unwrap_or(DEFAULT_STARTING_ROW_INDEX)
    }

    pub fn ledger_base(&self) -> u64 {
        self.ledger_base_id.unwrap_or(LEDGER_BASE_ID)
    }

    pub fn account_base(&self) -> u64 {
        self.account_base_id.unwrap_or(ACCOUNT_BASE_ID)
    }

    pub fn tax_coin(&self) -> &str {
        self.tax_currency.as_deref().unwrap_or(TAX_COIN)
    }

    pub fn account_ids(&self) -> Vec<&str> {
        match &self.accounts {
            Some(accounts) => accounts.iter().map(String::as_str).collect(),
            None => VALID_ACCOUNTS.to_vec(),
        }
    }

    pub fn effective_date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }
}

/// Turns raw transaction rows into a [`Ledger`].
#[derive(Debug, Clone, Default)]
pub struct TransactionNormalizer {
    config: NormalizerConfig,
    layout: ColumnLayout,
}

impl TransactionNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            layout: ColumnLayout::new(),
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalizes a batch of rows.
    ///
    /// Pure: the same rows always give the same ledger. An invalid
    /// configuration is reported before any row is read.
    pub fn normalize(&self, rows: &[RawRow]) -> TransactionResult<Ledger> {
        self.config.validate()?;
        let first_row = self.config.starting_row();
        if first_row.checked_add(rows.len()).is_none() {
            return Err(TransactionError::InvalidConfig(format!(
                "startingRowIndex {} leaves no room for {} rows",
                first_row,
                rows.len()
            )));
        }
        self.check_all_columns(first_row, rows)?;

        let entries = rows
            .iter()
            .enumerate()
            .map(|(pos, raw)| self.parse_row(first_row + pos, raw))
            .collect::<TransactionResult<Vec<_>>>()
            .map_err(|e| {
                warn!("Normalization aborted: {}", e);
                e
            })?;

        let ledger = Ledger::build(
            entries,
            self.config.account_ids(),
            self.config.ledger_base(),
            self.config.account_base(),
        )?;
        ledger.check_consistency(self.config.account_base())?;

        debug!(
            "Normalized {} transactions over {} accounts",
            ledger.len(),
            ledger.accounts().len()
        );
        Ok(ledger)
    }

    fn check_all_columns(&self, first_row: usize, rows: &[RawRow]) -> TransactionResult<()> {
        let expected = self.layout.expected_count();
        for (pos, raw) in rows.iter().enumerate() {
            let found = raw.field_count();
            if found != expected {
                let err = TransactionError::ColumnCount {
                    row: first_row + pos,
                    found,
                    expected,
                };
                warn!("check_all_columns(): {}", err);
                return Err(err);
            }
        }
        Ok(())
    }

    fn parse_row(&self, row: usize, raw: &RawRow) -> TransactionResult<ProvisionalEntry> {
        debug!("Row {}: types={}", row, raw.type_trace());

        let account = text_of(row, raw, Column::Id)?;
        if !self.config.account_ids().contains(&account.as_str()) {
            return Err(TransactionError::UnknownAccount { row, account });
        }

        let date = self.date_from_cell(row, raw)?;
        let quantity = quantity_of(row, raw)?;
        let unit_price = decimal_of(row, raw, Column::Per)?;
        let value = Decimal::from(quantity)
            .checked_mul(unit_price)
            .ok_or_else(|| TransactionError::ValueOverflow {
                row,
                quantity,
                unit_price: unit_price.to_string(),
            })?
            .round_dp_with_strategy(
                DISPLAY_DECIMAL_PRECISION,
                RoundingStrategy::MidpointNearestEven,
            );
        let isin = text_of(row, raw, Column::Isin)?;

        Ok(ProvisionalEntry {
            row,
            account,
            date,
            shown_total: money_string(value),
            product: text_of(row, raw, Column::Produto)?,
            direction: Direction::from_quantity(quantity),
            quantity,
            value,
            isin: (!isin.is_empty()).then_some(isin),
            tax: self.tax_of(row, raw)?,
        })
    }

    /// ISO date of the `Data` cell.
    ///
    /// String cells are read with the configured day-month-year format;
    /// native date cells are used as they are.
    fn date_from_cell(&self, row: usize, raw: &RawRow) -> TransactionResult<NaiveDate> {
        let cell = cell_of(row, raw, Column::Data)?;
        match (cell.cell_type, &cell.value) {
            (CellType::String, CellValue::Text(s)) => {
                parse_date(s, self.config.effective_date_format()).map_err(|_| {
                    TransactionError::InvalidDate {
                        row,
                        value: s.clone(),
                    }
                })
            }
            (CellType::Date, CellValue::DateTime(dt)) => Ok(dt.date()),
            (CellType::String, _) | (CellType::Date, _) => Err(TransactionError::InvalidDate {
                row,
                value: cell.value.to_string(),
            }),
            (other, _) => Err(TransactionError::UnsupportedDateType {
                row,
                tag: other.tag(),
            }),
        }
    }

    /// Tax of the row; a blank cell is no tax.
    ///
    /// The numeric amount is read back from the shown amount so that both
    /// always agree.
    fn tax_of(&self, row: usize, raw: &RawRow) -> TransactionResult<Tax> {
        let cell = cell_of(row, raw, Column::Taxa)?;
        let currency = self.config.tax_coin().to_string();
        if cell.value.is_empty() {
            return Ok(Tax {
                shown: NO_TAX.to_string(),
                amount: Decimal::ZERO,
                currency,
            });
        }
        let amount = decimal_of(row, raw, Column::Taxa)?;
        let shown = money_string(amount);
        let amount = Decimal::from_str(shown.trim()).map_err(|_| TransactionError::InvalidNumber {
            row,
            column: Column::Taxa.name(),
            value: shown.clone(),
        })?;
        Ok(Tax {
            shown,
            amount,
            currency,
        })
    }
}

/// Normalizes rows with the default configuration and a given first row.
pub fn normalize(rows: &[RawRow], starting_row_index: usize) -> TransactionResult<Ledger> {
    let config = NormalizerConfig {
        starting_row_index: Some(starting_row_index),
        ..Default::default()
    };
    TransactionNormalizer::new(config).normalize(rows)
}

fn cell_of(row: usize, raw: &RawRow, column: Column) -> TransactionResult<&Cell> {
    raw.get(column).ok_or(TransactionError::MissingColumn {
        row,
        column: column.name(),
    })
}

/// Text content of a cell; blank is the empty string.
fn text_of(row: usize, raw: &RawRow, column: Column) -> TransactionResult<String> {
    let cell = cell_of(row, raw, column)?;
    Ok(match &cell.value {
        CellValue::Empty => String::new(),
        CellValue::Text(s) => s.trim().to_string(),
        other => other.to_string(),
    })
}

fn decimal_of(row: usize, raw: &RawRow, column: Column) -> TransactionResult<Decimal> {
    let cell = cell_of(row, raw, column)?;
    cell.value
        .as_decimal()
        .ok_or_else(|| TransactionError::InvalidNumber {
            row,
            column: column.name(),
            value: cell.value.to_string(),
        })
}

/// Signed quantity; must come from a numeric cell holding an integer.
fn quantity_of(row: usize, raw: &RawRow) -> TransactionResult<i64> {
    let cell = cell_of(row, raw, Column::Quantidade)?;
    match (cell.cell_type, &cell.value) {
        (CellType::Numeric, CellValue::Integer(q)) => Ok(*q),
        (_, value) => Err(TransactionError::NonIntegerQuantity {
            row,
            value: value.to_string(),
        }),
    }
}
