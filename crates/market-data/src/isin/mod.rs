//! ISIN checksum and validation (ISO 6166).
//!
//! An ISIN is a 12-character code: a two-letter country code, a nine
//! character alphanumeric security identifier and a trailing check digit.
//! The check digit is a Luhn variant computed over the decimal expansion
//! of the first eleven characters, where `0..9` map to themselves and
//! `A..Z` map to `10..35`.
//!
//! ```
//! use netstocked_market_data::isin::{checksum, is_valid};
//!
//! assert!(is_valid("US0378331005"));
//! assert_eq!(checksum("US037833100").as_deref(), Some("US0378331005"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};


/// Length of a complete ISIN code, check digit included.
pub const ISIN_LENGTH: usize = 12;

/// Length of an ISIN without its check digit.
pub const ISIN_BODY_LENGTH: usize = ISIN_LENGTH - 1;

/// Placeholder appended to an 11-character body before recomputing.
const CHECK_PLACEHOLDER: char = '0';

/// Value of one ISIN character in the `0-9A-Z` ordering.
fn char_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => c.to_digit(10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

fn digit_sum(n: u32) -> u32 {
    n / 10 + n % 10
}

/// Check digit over the first eleven characters of a 12-character code.
///
/// The character at the check position is ignored. Returns `None` when the
/// input length is not 12 or a character falls outside `0-9A-Z`.
pub fn isin_checksum_digit(code: &str) -> Option<u8> {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != ISIN_LENGTH {
        return None;
    }

    let mut expansion = String::with_capacity(ISIN_BODY_LENGTH * 2);
    for c in &chars[..ISIN_BODY_LENGTH] {
        expansion.push_str(&char_value(*c)?.to_string());
    }

    let sum: u32 = expansion
        .chars()
        .rev()
        .enumerate()
        .map(|(idx, c)| {
            let d = c.to_digit(10).unwrap_or(0);
            // 1-based odd positions after reversal get doubled
            if idx % 2 == 0 {
                digit_sum(2 * d)
            } else {
                d
            }
        })
        .sum();

    Some(((10 - sum % 10) % 10) as u8)
}

/// Computes the check digit of a 12-character code and rebuilds the code
/// with that digit in the last position.
///
/// Returns `None` ("not computable") for any other length.
pub fn checksum_digit(code: &str) -> Option<(u8, String)> {
    let digit = isin_checksum_digit(code)?;
    let body: String = code.chars().take(ISIN_BODY_LENGTH).collect();
    Some((digit, format!("{}{}", body, digit)))
}

/// Whether `code` is a complete ISIN whose last character matches the
/// check digit of the first eleven. Case-sensitive.
pub fn is_valid(code: &str) -> bool {
    match checksum_digit(code) {
        Some((_, rebuilt)) => rebuilt == code,
        None => false,
    }
}

/// Returns the 12-character code with a freshly computed check digit.
///
/// Accepts an 11-character body or a full 12-character code (whose last
/// character is replaced). Any other length is not computable.
pub fn checksum(code: &str) -> Option<String> {
    let body: String = match code.chars().count() {
        ISIN_BODY_LENGTH => code.to_string(),
        ISIN_LENGTH => code.chars().take(ISIN_BODY_LENGTH).collect(),
        _ => return None,
    };
    let placeholder = format!("{}{}", body, CHECK_PLACEHOLDER);
    let digit = isin_checksum_digit(&placeholder)?;
    Some(format!("{}{}", body, digit))
}

/// An ISIN as observed in a data source, valid or not.
///
/// Displays as the code itself when valid, otherwise as `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Isin(String);

impl Isin {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        is_valid(&self.0)
    }

    /// Two-letter country prefix, if the code is long enough.
    pub fn country_code(&self) -> Option<&str> {
        self.0.get(..2)
    }

    pub fn checksum_digit(&self) -> Option<(u8, String)> {
        checksum_digit(&self.0)
    }
}

impl fmt::Display for Isin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "-")
        }
    }
}

impl From<&str> for Isin {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
