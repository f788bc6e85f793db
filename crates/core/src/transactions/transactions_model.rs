//! Transaction domain models: raw cells and rows, provisional entries and
//! the canonical ledger entry.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::columns::{Column, ColumnLayout};
use crate::utils::iso_date;

/// Source type of a spreadsheet cell, as reported by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellType {
    Numeric,
    /// Formatted string
    String,
    /// Native date/time value
    Date,
    Boolean,
    Formula,
    Error,
}

impl CellType {
    /// One-letter tag used in row type traces.
    pub fn tag(&self) -> char {
        match self {
            CellType::Numeric => 'n',
            CellType::String => 's',
            CellType::Date => 'd',
            CellType::Boolean => 'b',
            CellType::Formula => 'f',
            CellType::Error => 'e',
        }
    }

    pub fn from_tag(tag: char) -> Option<CellType> {
        match tag {
            'n' => Some(CellType::Numeric),
            's' => Some(CellType::String),
            'd' => Some(CellType::Date),
            'b' => Some(CellType::Boolean),
            'f' => Some(CellType::Formula),
            'e' => Some(CellType::Error),
            _ => None,
        }
    }
}

/// Decoded value of a spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum CellValue {
    Empty,
    Integer(i64),
    Number(Decimal),
    Text(String),
    DateTime(NaiveDateTime),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Numeric content, integers included.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            CellValue::Integer(i) => Some(Decimal::from(*i)),
            CellValue::Number(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, "None"),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Number(d) => write!(f, "{}", d),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::DateTime(dt) => write!(f, "{}", dt),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A typed cell: (source type, value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub cell_type: CellType,
    pub value: CellValue,
}

impl Cell {
    pub fn new(cell_type: CellType, value: CellValue) -> Self {
        Self { cell_type, value }
    }

    /// A blank cell; readers report blanks as numeric.
    pub fn empty() -> Self {
        Self::new(CellType::Numeric, CellValue::Empty)
    }

    pub fn integer(value: i64) -> Self {
        Self::new(CellType::Numeric, CellValue::Integer(value))
    }

    pub fn number(value: Decimal) -> Self {
        Self::new(CellType::Numeric, CellValue::Number(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(CellType::String, CellValue::Text(value.into()))
    }

    pub fn date(value: NaiveDate) -> Self {
        Self::new(
            CellType::Date,
            CellValue::DateTime(value.and_hms_opt(0, 0, 0).unwrap_or_default()),
        )
    }
}

/// One sheet row keyed by column, before any interpretation.
///
/// A column counts as populated when the reader produced a cell for it,
/// even a blank one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: BTreeMap<Column, Cell>,
    type_trace: String,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from `(column letter, cell)` pairs.
    ///
    /// Letters outside the layout are dropped but still show up in the
    /// type trace.
    pub fn from_cells<'a, I>(layout: &ColumnLayout, cells: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Cell)>,
    {
        let mut row = Self::new();
        for (letter, cell) in cells {
            row.type_trace.push(cell.cell_type.tag());
            if let Some(column) = layout.column_at(letter) {
                row.cells.insert(column, cell);
            }
        }
        row
    }

    /// Sets a column, recording its type in the trace.
    pub fn insert(&mut self, column: Column, cell: Cell) {
        self.type_trace.push(cell.cell_type.tag());
        self.cells.insert(column, cell);
    }

    pub fn with(mut self, column: Column, cell: Cell) -> Self {
        self.insert(column, cell);
        self
    }

    pub fn get(&self, column: Column) -> Option<&Cell> {
        self.cells.get(&column)
    }

    /// Number of populated columns.
    pub fn field_count(&self) -> usize {
        self.cells.len()
    }

    /// Type tags of every cell seen for this row, in reading order.
    pub fn type_trace(&self) -> &str {
        &self.type_trace
    }
}

/// Trade direction, derived from the sign of the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    /// `Buy` for a positive quantity, `Sell` otherwise.
    pub fn from_quantity(quantity: i64) -> Self {
        if quantity > 0 {
            Direction::Buy
        } else {
            Direction::Sell
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "buy",
            Direction::Sell => "sell",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Tax paid on a transaction: (shown amount, amount, currency).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tax {
    /// Formatted amount, `-` when the sheet has no tax
    pub shown: String,
    pub amount: Decimal,
    pub currency: String,
}

/// Shown tax when the tax cell is blank
pub const NO_TAX: &str = "-";

/// A parsed row, before ledger numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionalEntry {
    /// Spreadsheet row number the entry came from
    pub row: usize,
    pub account: String,
    pub date: NaiveDate,
    pub shown_total: String,
    pub product: String,
    pub direction: Direction,
    pub quantity: i64,
    pub value: Decimal,
    pub isin: Option<String>,
    pub tax: Tax,
}

impl ProvisionalEntry {
    /// Numbers the entry.
    pub fn into_entry(self, id: u64) -> LedgerEntry {
        LedgerEntry {
            id,
            account: self.account,
            date: self.date,
            shown_total: self.shown_total,
            product: self.product,
            direction: self.direction,
            quantity: self.quantity,
            value: self.value,
            isin: self.isin,
            tax: self.tax,
            source_row: self.row,
        }
    }
}

/// One normalized buy/sell transaction.
///
/// Entries are immutable once numbered. The same transaction appears once
/// in the flat ledger and once in its account bucket; only `id` differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: u64,
    pub account: String,
    pub date: NaiveDate,
    pub shown_total: String,
    pub product: String,
    pub direction: Direction,
    /// Signed quantity, negative for sales
    pub quantity: i64,
    /// quantity x unit price, rounded to cents
    pub value: Decimal,
    pub isin: Option<String>,
    pub tax: Tax,
    /// Spreadsheet row number
    pub source_row: usize,
}

impl LedgerEntry {
    pub fn iso_date(&self) -> String {
        iso_date(self.date)
    }

    /// The same entry under another id.
    pub fn renumbered(&self, id: u64) -> LedgerEntry {
        LedgerEntry { id, ..self.clone() }
    }

    /// Debug marker of the originating row.
    pub fn line_marker(&self) -> String {
        format!("line={}", self.source_row)
    }
}
