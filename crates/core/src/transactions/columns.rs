//! Column layout of the stock transactions sheet.
//!
//! The sheet has a single header row and 18 columns, `A` (`ID`) through
//! `R` (`Total`). Columns are matched by spreadsheet letter; header names
//! are only compared for diagnostics.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

/// One column of the transactions sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Account identifier
    Id,
    /// Trade date
    Data,
    /// Trade time
    Hora,
    /// Product (stock) name
    Produto,
    Isin,
    /// Exchange
    Bolsa,
    /// Signed quantity, negative for sales
    Quantidade,
    Vm0,
    /// Unit price
    Per,
    Trm,
    ValorLocal,
    Vm,
    Valor,
    Cambio,
    Vm2,
    /// Tax amount
    Taxa,
    Vm3,
    Total,
}

impl Column {
    /// All columns in sheet order.
    pub const ALL: [Column; 18] = [
        Column::Id,
        Column::Data,
        Column::Hora,
        Column::Produto,
        Column::Isin,
        Column::Bolsa,
        Column::Quantidade,
        Column::Vm0,
        Column::Per,
        Column::Trm,
        Column::ValorLocal,
        Column::Vm,
        Column::Valor,
        Column::Cambio,
        Column::Vm2,
        Column::Taxa,
        Column::Vm3,
        Column::Total,
    ];

    /// Header name as written in the sheet.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Data => "Data",
            Column::Hora => "Hora",
            Column::Produto => "Produto",
            Column::Isin => "ISIN",
            Column::Bolsa => "Bolsa",
            Column::Quantidade => "Quantidade",
            Column::Vm0 => "VM0",
            Column::Per => "Per",
            Column::Trm => "TRM",
            Column::ValorLocal => "Valor_local",
            Column::Vm => "VM",
            Column::Valor => "Valor",
            Column::Cambio => "Cambio",
            Column::Vm2 => "VM2",
            Column::Taxa => "Taxa",
            Column::Vm3 => "VM3",
            Column::Total => "Total",
        }
    }

    /// 1-based column index.
    pub fn index(&self) -> usize {
        *self as usize + 1
    }

    /// Spreadsheet column letter, `A` for the first column.
    pub fn letter(&self) -> char {
        (b'A' + *self as u8) as char
    }

    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn from_letter(letter: &str) -> Option<Column> {
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Column::ALL.into_iter().find(|col| col.letter() == c),
            _ => None,
        }
    }

    pub fn from_index(index: usize) -> Option<Column> {
        index.checked_sub(1).and_then(|i| Column::ALL.get(i).copied())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The expected header of the transactions sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnLayout;

impl ColumnLayout {
    pub fn new() -> Self {
        Self
    }

    /// Number of columns a complete row must have.
    pub fn expected_count(&self) -> usize {
        Column::ALL.len()
    }

    /// Column stored under a spreadsheet letter, if it belongs to the layout.
    pub fn column_at(&self, letter: &str) -> Option<Column> {
        Column::from_letter(letter)
    }

    /// Compares a header row with the layout.
    ///
    /// Spaces inside header names are ignored. Returns one message per
    /// mismatching or missing column; extra trailing columns are ignored.
    pub fn check_header<S: AsRef<str>>(&self, header: &[S]) -> Vec<String> {
        let mut mismatches = Vec::new();
        for column in Column::ALL {
            let found = header
                .get(column.index() - 1)
                .map(|h| h.as_ref().replace(' ', ""));
            match found {
                Some(name) if name == column.name() => {}
                Some(name) => mismatches.push(format!(
                    "Column {} ({}): expected '{}', got '{}'",
                    column.letter(),
                    column.index(),
                    column.name(),
                    name
                )),
                None => mismatches.push(format!(
                    "Column {} ({}): missing '{}'",
                    column.letter(),
                    column.index(),
                    column.name()
                )),
            }
        }
        for msg in &mismatches {
            warn!("Header mismatch: {}", msg);
        }
        mismatches
    }
}
