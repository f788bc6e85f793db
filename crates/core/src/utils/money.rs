use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Width of a formatted money column
const MONEY_WIDTH: usize = 10;

/// Formats an amount right-aligned in a 10 character column with 2 decimals.
pub fn money_string(value: Decimal) -> String {
    format!(
        "{:>width$.prec$}",
        value.round_dp(DISPLAY_DECIMAL_PRECISION),
        width = MONEY_WIDTH,
        prec = DISPLAY_DECIMAL_PRECISION as usize
    )
}

/// Empty string for a missing value.
pub fn known_str(value: Option<&str>) -> &str {
    value.unwrap_or("")
}
